//! WASPAS - weighted aggregated sum product assessment.

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::normalization::{CriterionNormalizer, NormalizationKind};

use super::{aligned_weights, MethodParams, Saw};

/// WASPAS: `λ·WSM_i + (1-λ)·WPM_i`, where WSM is the SAW score and WPM the
/// weighted geometric mean `Π_j u_ij^{w_j}` over floored utilities. Higher
/// is better.
pub struct Waspas;

impl Waspas {
    /// Scores every alternative.
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &MethodParams,
    ) -> Result<Vec<f64>, EngineError> {
        let lambda = params.waspas_lambda.value();
        let wsm = Saw::score(matrix, specs, weights)?;
        let utilities = CriterionNormalizer::normalize(
            matrix,
            specs,
            NormalizationKind::Floor,
            params.utility_floor.value(),
        )?;
        let w = aligned_weights(weights, specs)?;

        let scores = (0..matrix.alternative_count())
            .map(|i| {
                let wpm = (0..specs.len())
                    .map(|j| {
                        let u = utilities.utility(i, j);
                        if u.is_nan() {
                            f64::NAN
                        } else {
                            u.max(f64::EPSILON).powf(w[j])
                        }
                    })
                    .product::<f64>();
                lambda * wsm[i] + (1.0 - lambda) * wpm
            })
            .collect();
        Ok(scores)
    }
}
