//! Weighting policy and weight resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::EngineWarning;
use crate::domain::matrix::CriterionSpec;

/// How criterion weights are declared by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Every criterion gets weight `1/m`.
    Uniform,
    /// Raw non-negative weights keyed by criterion name, normalized to
    /// sum 1 during resolution.
    Custom { weights: HashMap<String, f64> },
}

/// Resolved per-criterion weights: non-negative, summing to 1, aligned to
/// the criterion spec order of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    criteria: Vec<String>,
    values: Vec<f64>,
}

impl WeightVector {
    /// Returns the weight for a criterion, if present.
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|name| name == criterion)
            .map(|index| self.values[index])
    }

    /// Returns the weights in criterion order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the criterion names in order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Resolves a weighting policy into a normalized weight vector.
pub struct WeightResolver;

impl WeightResolver {
    /// Resolves weights for the given criteria.
    ///
    /// Custom weights are clamped to non-negative, non-finite entries
    /// count as zero, and missing criteria get zero. A zero total falls
    /// back to uniform weights with a surfaced warning rather than a
    /// silent behavior change.
    ///
    /// # Edge Cases
    /// - No criteria: Returns an empty vector
    /// - All-zero or missing custom weights: Uniform fallback plus warning
    pub fn resolve(
        policy: &WeightPolicy,
        specs: &[CriterionSpec],
    ) -> (WeightVector, Vec<EngineWarning>) {
        let criteria: Vec<String> = specs.iter().map(|s| s.name.clone()).collect();
        let count = criteria.len();
        if count == 0 {
            return (
                WeightVector {
                    criteria,
                    values: Vec::new(),
                },
                Vec::new(),
            );
        }

        let uniform = 1.0 / count as f64;
        match policy {
            WeightPolicy::Uniform => (
                WeightVector {
                    criteria,
                    values: vec![uniform; count],
                },
                Vec::new(),
            ),
            WeightPolicy::Custom { weights } => {
                let mut raw: Vec<f64> = criteria
                    .iter()
                    .map(|name| {
                        let value = weights.get(name).copied().unwrap_or(0.0);
                        if value.is_finite() {
                            value.max(0.0)
                        } else {
                            0.0
                        }
                    })
                    .collect();

                let total: f64 = raw.iter().sum();
                let mut warnings = Vec::new();
                if total <= 0.0 {
                    raw = vec![uniform; count];
                    warnings.push(EngineWarning::ZeroWeightFallback);
                } else {
                    for value in &mut raw {
                        *value /= total;
                    }
                }

                (
                    WeightVector {
                        criteria,
                        values: raw,
                    },
                    warnings,
                )
            }
        }
    }
}
