//! Criterion normalization - raw columns into bounded utility columns.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionMode, CriterionSpec, DecisionMatrix};
use crate::domain::numeric::{finite_max, finite_min};

/// Reference floor for floored utilities, keeping every utility strictly
/// positive.
pub const DEFAULT_UTILITY_FLOOR: f64 = 0.01;

/// The two normalization families the scoring methods were defined against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationKind {
    /// `u = C + (1-C)·(1 - |x - x*| / R)` clamped to `[C, 1]`, where `x*`
    /// is the column target (max, min, or declared goal) and `C` a small
    /// positive floor. No utility can be exactly zero.
    Floor,
    /// Classical `[0, 1]` linear form: `(x-min)/R` for benefit,
    /// `(max-x)/R` for cost, `1 - |x-t|/L` with `L = max(t-min, max-t)`
    /// for goal criteria.
    Linear,
}

/// Utility matrix: one normalized column per criterion, in spec order.
///
/// Derived from the decision matrix, never mutated after creation. NaN
/// cells from the raw matrix survive normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityMatrix {
    columns: Vec<Vec<f64>>,
}

impl UtilityMatrix {
    /// Returns the utility column for criterion index `j`.
    pub fn column(&self, j: usize) -> &[f64] {
        &self.columns[j]
    }

    /// Returns the utility of alternative `i` on criterion `j`.
    pub fn utility(&self, i: usize, j: usize) -> f64 {
        self.columns[j][i]
    }

    /// Returns the number of criterion columns.
    pub fn criterion_count(&self) -> usize {
        self.columns.len()
    }
}

/// Normalizer turning one raw column into a unit-scaled utility column.
pub struct CriterionNormalizer;

impl CriterionNormalizer {
    /// Normalizes a single column under the criterion's declared mode.
    ///
    /// # Edge Cases
    /// - Zero range (all finite values equal): every utility is 1.0, since
    ///   the column carries no discriminating information
    /// - NaN cells stay NaN
    pub fn normalize_column(
        values: &[f64],
        spec: &CriterionSpec,
        kind: NormalizationKind,
        floor: f64,
    ) -> Vec<f64> {
        let (min, max) = match (finite_min(values), finite_max(values)) {
            (Some(min), Some(max)) => (min, max),
            _ => return values.iter().map(|_| f64::NAN).collect(),
        };
        let range = max - min;
        if range <= 0.0 {
            return values
                .iter()
                .map(|v| if v.is_nan() { f64::NAN } else { 1.0 })
                .collect();
        }

        match kind {
            NormalizationKind::Floor => {
                let reference = match spec.mode {
                    CriterionMode::Maximize => max,
                    CriterionMode::Minimize => min,
                    CriterionMode::TargetValue { .. } => {
                        // resolved_target is Some here: the column has finite values
                        spec.resolved_target(values).unwrap_or((min + max) / 2.0)
                    }
                };
                values
                    .iter()
                    .map(|&v| {
                        let u = floor + (1.0 - floor) * (1.0 - (v - reference).abs() / range);
                        u.clamp(floor, 1.0)
                    })
                    .collect()
            }
            NormalizationKind::Linear => match spec.mode {
                CriterionMode::Maximize => {
                    values.iter().map(|&v| ((v - min) / range).clamp(0.0, 1.0)).collect()
                }
                CriterionMode::Minimize => {
                    values.iter().map(|&v| ((max - v) / range).clamp(0.0, 1.0)).collect()
                }
                CriterionMode::TargetValue { .. } => {
                    let target = spec.resolved_target(values).unwrap_or((min + max) / 2.0);
                    let span = (target - min).max(max - target);
                    values
                        .iter()
                        .map(|&v| {
                            if span <= 0.0 {
                                if v.is_nan() {
                                    f64::NAN
                                } else {
                                    1.0
                                }
                            } else {
                                (1.0 - (v - target).abs() / span).clamp(0.0, 1.0)
                            }
                        })
                        .collect()
                }
            },
        }
    }

    /// Normalizes every column of a matrix, in criterion spec order.
    pub fn normalize(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        kind: NormalizationKind,
        floor: f64,
    ) -> Result<UtilityMatrix, EngineError> {
        let mut columns = Vec::with_capacity(specs.len());
        for spec in specs {
            let column = matrix
                .column(&spec.name)
                .ok_or_else(|| EngineError::UnknownCriterion(spec.name.clone()))?;
            columns.push(Self::normalize_column(column, spec, kind, floor));
        }
        Ok(UtilityMatrix { columns })
    }
}
