//! Decision matrix, criterion specifications, and weight resolution.

mod criterion;
mod decision_matrix;
mod weights;

pub use criterion::{CriterionMode, CriterionSpec};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use weights::{WeightPolicy, WeightResolver, WeightVector};
