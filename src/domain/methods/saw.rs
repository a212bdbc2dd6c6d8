//! SAW - simple additive weighting.

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::normalization::{CriterionNormalizer, NormalizationKind};

use super::aligned_weights;

/// Simple additive weighting: `score_i = Σ_j w_j · u_ij` over linear
/// `[0, 1]` utilities. Higher is better.
pub struct Saw;

impl Saw {
    /// Scores every alternative.
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
    ) -> Result<Vec<f64>, EngineError> {
        let utilities =
            CriterionNormalizer::normalize(matrix, specs, NormalizationKind::Linear, 0.0)?;
        let w = aligned_weights(weights, specs)?;

        let scores = (0..matrix.alternative_count())
            .map(|i| {
                (0..specs.len())
                    .map(|j| w[j] * utilities.utility(i, j))
                    .sum()
            })
            .collect();
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::{WeightPolicy, WeightResolver};

    fn worked_example() -> (DecisionMatrix, Vec<CriterionSpec>, WeightVector) {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["A1", "A2", "A3"])
            .column("Price", vec![200.0, 250.0, 300.0])
            .column("Quality", vec![8.0, 7.0, 9.0])
            .column("Risk", vec![4.0, 5.0, 6.0])
            .column("Temperature", vec![55.0, 60.0, 70.0])
            .build()
            .unwrap();
        let specs = vec![
            CriterionSpec::minimize("Price"),
            CriterionSpec::maximize("Quality"),
            CriterionSpec::minimize("Risk"),
            CriterionSpec::target("Temperature", 60.0),
        ];
        let (weights, _) = WeightResolver::resolve(&WeightPolicy::Uniform, &specs);
        (matrix, specs, weights)
    }

    #[test]
    fn saw_reproduces_reference_scores() {
        let (matrix, specs, weights) = worked_example();
        let scores = Saw::score(&matrix, &specs, &weights).unwrap();
        let expected = [0.75, 0.5, 0.25];
        for (s, e) in scores.iter().zip(&expected) {
            assert!((s - e).abs() < 1e-6, "got {:?}", scores);
        }
    }

    #[test]
    fn saw_scores_stay_in_unit_interval() {
        let (matrix, specs, weights) = worked_example();
        let scores = Saw::score(&matrix, &specs, &weights).unwrap();
        assert!(scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn saw_propagates_nan_into_affected_alternative() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["A", "B", "C"])
            .column("Cost", vec![1.0, f64::NAN, 3.0])
            .column("Quality", vec![5.0, 6.0, 7.0])
            .build()
            .unwrap();
        let specs = vec![
            CriterionSpec::minimize("Cost"),
            CriterionSpec::maximize("Quality"),
        ];
        let (weights, _) = WeightResolver::resolve(&WeightPolicy::Uniform, &specs);

        let scores = Saw::score(&matrix, &specs, &weights).unwrap();
        assert!(scores[0].is_finite());
        assert!(scores[1].is_nan());
        assert!(scores[2].is_finite());
    }
}
