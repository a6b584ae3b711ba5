//! Command-line collaborators of the [`streak`] index.
//!
//! - `streak-demo`: draws records, prints the dump and listing, removes the
//!   middle draw and prints both again ([`demo::run_demo`]).
//! - `streak-bench`: times growing insert/remove batches against the
//!   expected `n·log2(n)` growth ([`bench::run_bench`]).

pub mod args;
pub mod bench;
pub mod demo;

use thiserror::Error;

pub use args::{BenchOptions, DemoOptions};
pub use bench::{expected_ratio, run_bench, BatchTiming, BenchReport, RATIO_TOLERANCE};
pub use demo::run_demo;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("bench needs --base of at least 2 and at least one step")]
    EmptyBench,
    #[error("largest batch of {0} ids does not fit in the id range")]
    BatchTooLarge(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
