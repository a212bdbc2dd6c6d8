//! Criterion specification - per-column semantics of the decision matrix.

use serde::{Deserialize, Serialize};

use crate::domain::numeric::finite_mean;

/// How raw values on a criterion relate to preference.
///
/// A closed enum rather than a free-form type string, so an invalid mode is
/// unrepresentable. The goal target travels inside its variant: it exists
/// exactly when the mode calls for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CriterionMode {
    /// Larger raw values are better (benefit criterion).
    Maximize,
    /// Smaller raw values are better (cost criterion).
    Minimize,
    /// Values nearest a declared target are better (goal criterion).
    /// With no target declared, the finite column mean is used instead.
    TargetValue { target: Option<f64> },
}

impl CriterionMode {
    /// Returns true for cost criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, CriterionMode::Minimize)
    }

    /// Returns true for goal criteria.
    pub fn is_goal(&self) -> bool {
        matches!(self, CriterionMode::TargetValue { .. })
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionMode::Maximize => "Benefit",
            CriterionMode::Minimize => "Cost",
            CriterionMode::TargetValue { .. } => "Goal",
        }
    }
}

/// One criterion of the decision matrix: a name plus its mode.
///
/// Declared once per run, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    pub mode: CriterionMode,
}

impl CriterionSpec {
    /// Creates a criterion spec.
    pub fn new(name: impl Into<String>, mode: CriterionMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }

    /// Creates a benefit criterion.
    pub fn maximize(name: impl Into<String>) -> Self {
        Self::new(name, CriterionMode::Maximize)
    }

    /// Creates a cost criterion.
    pub fn minimize(name: impl Into<String>) -> Self {
        Self::new(name, CriterionMode::Minimize)
    }

    /// Creates a goal criterion with a declared target.
    pub fn target(name: impl Into<String>, target: f64) -> Self {
        Self::new(
            name,
            CriterionMode::TargetValue {
                target: Some(target),
            },
        )
    }

    /// Resolves the goal target against a column, falling back to the
    /// finite column mean when no target was declared.
    ///
    /// Returns `None` for benefit and cost criteria, and for columns with
    /// no finite values at all.
    pub fn resolved_target(&self, column: &[f64]) -> Option<f64> {
        match self.mode {
            CriterionMode::TargetValue { target } => target.or_else(|| finite_mean(column)),
            _ => None,
        }
    }
}
