//! Application layer orchestrating full comparison runs.

pub mod run_comparison;

pub use run_comparison::{ComparisonReport, ComparisonRunner, MethodOutcome};
