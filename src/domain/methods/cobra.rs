//! COBRA - comprehensive distance-based ranking against reference
//! solutions. Lower is better under both strategies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::normalization::{CriterionNormalizer, NormalizationKind};
use crate::domain::numeric::{finite_max, finite_mean, finite_min};

use super::{aligned_weights, MethodParams};

/// The published COBRA descriptions disagree with each other, so both
/// readings stay available behind this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CobraStrategy {
    /// `score_i = Σ_j w_j·(μ_j − u_ij)` over floor utilities, where `μ_j`
    /// is the column mean. Negative means better than average.
    #[default]
    CenteredDistance,
    /// Blended Euclidean/taxicab distances to the per-column positive
    /// ideal, negative ideal, and average solutions, with the average
    /// split by an above/below-average gate.
    GatedBlend,
}

pub struct Cobra;

impl Cobra {
    /// Scores every alternative under the strategy in `params`.
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &MethodParams,
    ) -> Result<Vec<f64>, EngineError> {
        let w = aligned_weights(weights, specs)?;
        let utilities = CriterionNormalizer::normalize(
            matrix,
            specs,
            NormalizationKind::Floor,
            params.utility_floor.value(),
        )?;
        let n = matrix.alternative_count();
        let m = specs.len();

        match params.cobra_strategy {
            CobraStrategy::CenteredDistance => {
                let means: Vec<f64> = (0..m)
                    .map(|j| finite_mean(utilities.column(j)).unwrap_or(f64::NAN))
                    .collect();
                let scores = (0..n)
                    .map(|i| {
                        (0..m)
                            .map(|j| w[j] * (means[j] - utilities.utility(i, j)))
                            .sum()
                    })
                    .collect();
                Ok(scores)
            }
            CobraStrategy::GatedBlend => {
                let weighted: Vec<Vec<f64>> = (0..m)
                    .map(|j| utilities.column(j).iter().map(|u| u * w[j]).collect())
                    .collect();
                let positive: Vec<f64> = weighted
                    .iter()
                    .map(|column| finite_max(column).unwrap_or(f64::NAN))
                    .collect();
                let negative: Vec<f64> = weighted
                    .iter()
                    .map(|column| finite_min(column).unwrap_or(f64::NAN))
                    .collect();
                let average: Vec<f64> = weighted
                    .iter()
                    .map(|column| finite_mean(column).unwrap_or(f64::NAN))
                    .collect();

                let d_positive = blended_distances(&weighted, &positive, &average, Gate::All);
                let d_negative = blended_distances(&weighted, &negative, &average, Gate::All);
                let d_above = blended_distances(&weighted, &average, &average, Gate::AtOrAbove);
                let d_below = blended_distances(&weighted, &average, &average, Gate::Below);

                let scores = (0..n)
                    .map(|i| (d_positive[i] - d_negative[i] - d_above[i] + d_below[i]) / 4.0)
                    .collect();
                Ok(scores)
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Gate {
    All,
    AtOrAbove,
    Below,
}

/// Euclidean and taxicab distances to `reference`, blended as
/// `dE + ρ·dE·dT` with the range-based scaling `ρ = max dE − min dE`.
/// Gated variants only count cells on one side of the column average.
fn blended_distances(
    weighted: &[Vec<f64>],
    reference: &[f64],
    average: &[f64],
    gate: Gate,
) -> Vec<f64> {
    let n = weighted.first().map_or(0, Vec::len);
    let mut euclidean = Vec::with_capacity(n);
    let mut taxicab = Vec::with_capacity(n);
    for i in 0..n {
        let mut sum_sq = 0.0;
        let mut sum_abs = 0.0;
        for (j, column) in weighted.iter().enumerate() {
            let value = column[i];
            let included = match gate {
                Gate::All => true,
                // NaN cells fail both comparisons and drop out of the
                // gated sums; the ungated PIS/NIS distances still carry
                // the NaN into that alternative's score
                Gate::AtOrAbove => value >= average[j],
                Gate::Below => value < average[j],
            };
            if !included {
                continue;
            }
            let diff = reference[j] - value;
            sum_sq += diff * diff;
            sum_abs += diff.abs();
        }
        euclidean.push(sum_sq.sqrt());
        taxicab.push(sum_abs);
    }

    let rho = finite_max(&euclidean).unwrap_or(0.0) - finite_min(&euclidean).unwrap_or(0.0);
    (0..n)
        .map(|i| euclidean[i] + rho * euclidean[i] * taxicab[i])
        .collect()
}
