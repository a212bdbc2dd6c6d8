//! MOORA - multi-objective optimization by ratio analysis.

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionMode, CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::normalization::{CriterionNormalizer, NormalizationKind};
use crate::domain::numeric::vector_normalize;

use super::{aligned_weights, matrix_column, MethodParams};

/// MOORA ratio system: weighted benefit sum minus weighted cost sum over
/// vector-normalized columns. Goal criteria contribute through floored
/// distance-to-target utilities on the benefit side. Higher is better;
/// scores may be negative.
pub struct Moora;

impl Moora {
    /// Scores every alternative.
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &MethodParams,
    ) -> Result<Vec<f64>, EngineError> {
        let w = aligned_weights(weights, specs)?;
        let n = matrix.alternative_count();

        let mut normalized: Vec<Vec<f64>> = Vec::with_capacity(specs.len());
        for spec in specs {
            let column = matrix_column(matrix, &spec.name)?;
            let values = if spec.mode.is_goal() {
                CriterionNormalizer::normalize_column(
                    column,
                    spec,
                    NormalizationKind::Floor,
                    params.utility_floor.value(),
                )
            } else {
                vector_normalize(column)
            };
            normalized.push(values);
        }

        let scores = (0..n)
            .map(|i| {
                let mut benefit = 0.0;
                let mut cost = 0.0;
                for (j, spec) in specs.iter().enumerate() {
                    let term = w[j] * normalized[j][i];
                    match spec.mode {
                        CriterionMode::Minimize => cost += term,
                        _ => benefit += term,
                    }
                }
                benefit - cost
            })
            .collect();
        Ok(scores)
    }
}
