//! Flag parsing shared by the binaries.

use streak::{MAX_ID, MIN_ID};
use streak_random::DEFAULT_SEED;

use crate::CliError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoOptions {
    /// Number of records to draw.
    pub size: usize,
    pub seed: u64,
    /// Emit listings as JSON arrays.
    pub json: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            size: 10,
            seed: DEFAULT_SEED,
            json: false,
        }
    }
}

impl DemoOptions {
    /// Parses `--size N`, `--seed S` and `--json`. The first item is taken to
    /// be the program name.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter().skip(1);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--size" => opts.size = number(&flag, args.next())?,
                "--seed" => opts.seed = number(&flag, args.next())?,
                "--json" => opts.json = true,
                _ => return Err(CliError::UnknownFlag(flag)),
            }
        }
        Ok(opts)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchOptions {
    /// Size of the smallest batch.
    pub base: usize,
    /// Batches of `base`, `2 * base`, ... `steps * base` records are timed.
    pub steps: usize,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            base: 1000,
            steps: 3,
        }
    }
}

impl BenchOptions {
    /// Parses `--base N` and `--steps K`. The first item is taken to be the
    /// program name.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter().skip(1);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--base" => opts.base = number(&flag, args.next())?,
                "--steps" => opts.steps = number(&flag, args.next())?,
                _ => return Err(CliError::UnknownFlag(flag)),
            }
        }
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<(), CliError> {
        // log2(1) = 0 makes the expected ratio meaningless.
        if self.base < 2 || self.steps == 0 {
            return Err(CliError::EmptyBench);
        }
        let largest = self.base.saturating_mul(self.steps);
        if largest > (MAX_ID - MIN_ID + 1) as usize {
            return Err(CliError::BatchTooLarge(largest));
        }
        Ok(())
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, CliError> {
    let value = value.ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}
