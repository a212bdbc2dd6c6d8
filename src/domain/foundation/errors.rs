//! Error types for the engine domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Errors that abort a comparison run.
///
/// These are fail-fast conditions: the engine refuses to compute on inputs
/// that violate the decision matrix shape invariants. Data-quality issues
/// that still permit a defined result (NaN cells, zero-sum weights,
/// degenerate columns) are surfaced as warnings instead.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("Decision matrix has no alternatives")]
    NoAlternatives,

    #[error("Decision matrix has no criteria")]
    NoCriteria,

    #[error("Criterion '{criterion}' has {actual} values, expected {expected}")]
    ShapeMismatch {
        criterion: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate alternative identifier '{0}'")]
    DuplicateAlternative(String),

    #[error("Duplicate criterion name '{0}'")]
    DuplicateCriterion(String),

    #[error("Criterion '{0}' has no finite values")]
    NoFiniteValues(String),

    #[error("Expected {expected} criterion specs, got {actual}")]
    SpecCountMismatch { expected: usize, actual: usize },

    #[error("Criterion '{0}' is not a column of the decision matrix")]
    UnknownCriterion(String),

    #[error("No weight resolved for criterion '{0}'")]
    MissingWeight(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
