use std::collections::HashSet;

use streak::{Animal, LifeStage, Sex, MAX_ID, MIN_ID};

use crate::fuzzer::Fuzzer;

/// Seed used when none is given, so repeated runs draw the same records.
pub const DEFAULT_SEED: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordGenOptions {
    pub min_id: u32,
    pub max_id: u32,
    pub seed: u64,
}

impl Default for RecordGenOptions {
    fn default() -> Self {
        Self {
            min_id: MIN_ID,
            max_id: MAX_ID,
            seed: DEFAULT_SEED,
        }
    }
}

/// Draws live animals with uniformly distributed ids and categories.
pub struct RecordGen {
    opts: RecordGenOptions,
    fuzzer: Fuzzer,
}

impl RecordGen {
    pub fn new(opts: RecordGenOptions) -> Self {
        Self {
            fuzzer: Fuzzer::from_u64(opts.seed),
            opts,
        }
    }

    pub fn options(&self) -> &RecordGenOptions {
        &self.opts
    }

    /// Restarts the sequence from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        self.opts.seed = seed;
        self.fuzzer = Fuzzer::from_u64(seed);
    }

    pub fn next_animal(&mut self) -> Animal {
        let id = self.fuzzer.random_int(self.opts.min_id, self.opts.max_id);
        let stage = *self.fuzzer.pick(&LifeStage::ALL);
        let sex = *self.fuzzer.pick(&Sex::ALL);
        Animal::new(id).with_stage(stage).with_sex(sex)
    }

    /// `n` records; ids may repeat.
    pub fn animals(&mut self, n: usize) -> Vec<Animal> {
        (0..n).map(|_| self.next_animal()).collect()
    }

    /// Up to `n` records with pairwise distinct ids, capped by the size of the
    /// id range.
    pub fn unique_animals(&mut self, n: usize) -> Vec<Animal> {
        let span = (self.opts.max_id - self.opts.min_id) as usize + 1;
        let n = n.min(span);
        let mut seen = HashSet::with_capacity(n);
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            let animal = self.next_animal();
            if seen.insert(animal.id) {
                out.push(animal);
            }
        }
        out
    }
}

impl Default for RecordGen {
    fn default() -> Self {
        Self::new(RecordGenOptions::default())
    }
}

impl Iterator for RecordGen {
    type Item = Animal;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_animal())
    }
}
