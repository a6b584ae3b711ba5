//! Batch timing of insert/remove to check logarithmic growth empirically.

use std::time::{Duration, Instant};

use log::info;
use streak::{Animal, Streak, MIN_ID};

use crate::args::BenchOptions;

/// Largest accepted gap between measured and expected ratio.
pub const RATIO_TOLERANCE: f64 = 0.4;

/// `n·log2(n) / (base·log2(base))`: how much longer `n` operations should
/// take than `base` operations on a balanced tree.
pub fn expected_ratio(base: usize, n: usize) -> f64 {
    let cost = |x: usize| x as f64 * (x as f64).log2();
    cost(n) / cost(base)
}

#[derive(Clone, Debug)]
pub struct BatchTiming {
    pub n: usize,
    pub elapsed: Duration,
    /// `elapsed / elapsed(base)`.
    pub ratio: f64,
    pub expected: f64,
}

impl BatchTiming {
    pub fn acceptable(&self) -> bool {
        (self.ratio - self.expected).abs() < RATIO_TOLERANCE
    }
}

#[derive(Clone, Debug, Default)]
pub struct BenchReport {
    pub insert: Vec<BatchTiming>,
    pub remove: Vec<BatchTiming>,
}

fn sequential(n: usize) -> impl Iterator<Item = Animal> {
    (MIN_ID..MIN_ID + n as u32).map(Animal::new)
}

fn time_insert(n: usize) -> Duration {
    let mut streak = Streak::new();
    let start = Instant::now();
    for animal in sequential(n) {
        streak.insert(animal);
    }
    start.elapsed()
}

fn time_remove(n: usize) -> Duration {
    let mut streak: Streak = sequential(n).collect();
    let start = Instant::now();
    for id in MIN_ID..MIN_ID + n as u32 {
        streak.remove(id);
    }
    start.elapsed()
}

fn batches(opts: &BenchOptions, time: impl Fn(usize) -> Duration) -> Vec<BatchTiming> {
    let mut out: Vec<BatchTiming> = Vec::with_capacity(opts.steps);
    for k in 1..=opts.steps {
        let n = opts.base * k;
        let elapsed = time(n);
        let base_elapsed = out.first().map_or(elapsed, |b| b.elapsed);
        let ratio = if base_elapsed.is_zero() {
            0.0
        } else {
            elapsed.as_secs_f64() / base_elapsed.as_secs_f64()
        };
        info!("n={n}: {elapsed:?}");
        out.push(BatchTiming {
            n,
            elapsed,
            ratio,
            expected: expected_ratio(opts.base, n),
        });
    }
    out
}

/// Times `steps` insert batches and `steps` remove batches of sequential ids.
pub fn run_bench(opts: &BenchOptions) -> BenchReport {
    BenchReport {
        insert: batches(opts, time_insert),
        remove: batches(opts, time_remove),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_ratio_for_doubling() {
        assert_eq!(expected_ratio(1000, 1000), 1.0);
        let r = expected_ratio(1000, 2000);
        assert!((r - 2.2007).abs() < 1e-3, "{r}");
    }

    #[test]
    fn acceptance_window() {
        let t = |ratio| BatchTiming {
            n: 2000,
            elapsed: Duration::ZERO,
            ratio,
            expected: 2.2,
        };
        assert!(t(2.5).acceptable());
        assert!(!t(2.7).acceptable());
        assert!(!t(1.7).acceptable());
    }

    #[test]
    fn report_has_one_batch_per_step() {
        let report = run_bench(&BenchOptions { base: 50, steps: 3 });
        let sizes: Vec<usize> = report.insert.iter().map(|b| b.n).collect();
        assert_eq!(sizes, vec![50, 100, 150]);
        assert_eq!(report.remove.len(), 3);
        assert_eq!(report.insert[0].expected, 1.0);
    }
}
