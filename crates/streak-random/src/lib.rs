//! Pseudo-random animal records for exercising a [`streak::Streak`].
//!
//! - [`fuzzer`]: seeded xoshiro256** helpers
//! - [`record_gen`]: [`RecordGen`] and its options

pub mod fuzzer;
pub mod record_gen;

pub use fuzzer::Fuzzer;
pub use record_gen::{RecordGen, RecordGenOptions, DEFAULT_SEED};
