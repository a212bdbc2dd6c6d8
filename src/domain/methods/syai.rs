//! SYAI - closeness index over the weighted floor-utility matrix.

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::normalization::{CriterionNormalizer, NormalizationKind};
use crate::domain::numeric::{finite_max, finite_min, guard_denominator};

use super::{aligned_weights, MethodParams};

/// Full SYAI breakdown for one scoring run. Keeping the distance
/// components lets callers explain a score, not just report it.
#[derive(Debug, Clone)]
pub struct SyaiAnalysis {
    /// L1 distance to the per-criterion weighted maximum.
    pub d_plus: Vec<f64>,
    /// L1 distance to the per-criterion weighted minimum.
    pub d_minus: Vec<f64>,
    /// `((1-β)·D⁻) / (β·D⁺ + (1-β)·D⁻)`, higher is better.
    pub closeness: Vec<f64>,
}

/// SYAI closeness index: floor utilities are weighted first, the
/// per-criterion anchors `A⁺`/`A⁻` are the extrema of that weighted
/// matrix, and distances are L1. The anchors deliberately live in
/// weighted space, unlike the TOPSIS ideal.
pub struct Syai;

impl Syai {
    /// Scores every alternative (the closeness value).
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &MethodParams,
    ) -> Result<Vec<f64>, EngineError> {
        Ok(Self::analyze(matrix, specs, weights, params)?.closeness)
    }

    /// Computes the full distance breakdown.
    pub fn analyze(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &MethodParams,
    ) -> Result<SyaiAnalysis, EngineError> {
        let beta = params.syai_beta.value();
        let w = aligned_weights(weights, specs)?;
        let utilities = CriterionNormalizer::normalize(
            matrix,
            specs,
            NormalizationKind::Floor,
            params.utility_floor.value(),
        )?;
        let n = matrix.alternative_count();

        let weighted: Vec<Vec<f64>> = (0..specs.len())
            .map(|j| utilities.column(j).iter().map(|u| u * w[j]).collect())
            .collect();
        let anchors_plus: Vec<f64> = weighted
            .iter()
            .map(|column| finite_max(column).unwrap_or(f64::NAN))
            .collect();
        let anchors_minus: Vec<f64> = weighted
            .iter()
            .map(|column| finite_min(column).unwrap_or(f64::NAN))
            .collect();

        let mut d_plus = Vec::with_capacity(n);
        let mut d_minus = Vec::with_capacity(n);
        let mut closeness = Vec::with_capacity(n);
        for i in 0..n {
            let dp: f64 = (0..specs.len())
                .map(|j| (weighted[j][i] - anchors_plus[j]).abs())
                .sum();
            let dm: f64 = (0..specs.len())
                .map(|j| (weighted[j][i] - anchors_minus[j]).abs())
                .sum();
            let score = ((1.0 - beta) * dm) / guard_denominator(beta * dp + (1.0 - beta) * dm);
            d_plus.push(dp);
            d_minus.push(dm);
            closeness.push(score);
        }

        Ok(SyaiAnalysis {
            d_plus,
            d_minus,
            closeness,
        })
    }
}
