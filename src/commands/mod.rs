//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayInput, SessionSummary, run_play};
