//! Domain layer containing the aggregation and agreement logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, warnings, value objects)
//! - `matrix` - Decision matrix, criterion specs, weight resolution
//! - `normalization` - Floor and linear utility normalization
//! - `methods` - The seven scoring methods and their dispatcher
//! - `ranking` - Minimum-rank tie-aware rank assignment
//! - `agreement` - Pairwise correlation with significance testing
//! - `numeric` - Finite-aware statistics and special functions

pub mod agreement;
pub mod foundation;
pub mod matrix;
pub mod methods;
pub mod normalization;
pub mod numeric;
pub mod ranking;
