//! Data-quality warnings surfaced alongside results.
//!
//! Per the error handling contract, recoverable input issues do not abort a
//! run. They get a defined result plus a structured warning the caller can
//! render, so behavior changes (uniform-weight fallback, NaN propagation)
//! are never silent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable data-quality issue detected during a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineWarning {
    /// A raw cell was non-numeric or non-finite and was coerced to NaN.
    /// Every aggregate touching the cell carries NaN forward.
    NonNumericCell {
        alternative: String,
        criterion: String,
    },

    /// Custom weights were missing or summed to zero; uniform weights were
    /// used instead.
    ZeroWeightFallback,

    /// All values in the column are equal, so the criterion cannot
    /// discriminate; every utility is 1.0.
    DegenerateCriterion { criterion: String },

    /// A goal criterion had no declared target; the finite column mean was
    /// used instead.
    MissingTargetFallback { criterion: String, fallback: f64 },
}

impl fmt::Display for EngineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineWarning::NonNumericCell {
                alternative,
                criterion,
            } => write!(
                f,
                "Non-numeric value for alternative '{}' on criterion '{}'; treated as NaN",
                alternative, criterion
            ),
            EngineWarning::ZeroWeightFallback => {
                write!(f, "Custom weights sum to zero; falling back to uniform weights")
            }
            EngineWarning::DegenerateCriterion { criterion } => write!(
                f,
                "Criterion '{}' has identical values for every alternative; all utilities set to 1.0",
                criterion
            ),
            EngineWarning::MissingTargetFallback {
                criterion,
                fallback,
            } => write!(
                f,
                "Criterion '{}' declares no target; using column mean {} instead",
                criterion, fallback
            ),
        }
    }
}
