//! TOPSIS - technique for order of preference by similarity to ideal
//! solution.

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionMode, CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::numeric::{column_norm, finite_max, finite_min, guard_denominator, vector_normalize};

use super::{aligned_weights, matrix_column};

/// TOPSIS: Euclidean distances `D⁺`/`D⁻` to the per-column ideal and
/// anti-ideal in weighted vector-normalized space; score `D⁻/(D⁺+D⁻)`.
/// Higher is better.
pub struct Topsis;

impl Topsis {
    /// Scores every alternative.
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
    ) -> Result<Vec<f64>, EngineError> {
        let w = aligned_weights(weights, specs)?;
        let n = matrix.alternative_count();

        // weighted normalized columns plus per-column ideal/anti-ideal
        let mut weighted: Vec<Vec<f64>> = Vec::with_capacity(specs.len());
        let mut ideal: Vec<f64> = Vec::with_capacity(specs.len());
        let mut anti_ideal: Vec<f64> = Vec::with_capacity(specs.len());

        for (j, spec) in specs.iter().enumerate() {
            let raw = matrix_column(matrix, &spec.name)?;
            let column: Vec<f64> = vector_normalize(raw).iter().map(|v| v * w[j]).collect();

            let (best, worst) = match spec.mode {
                CriterionMode::Maximize => (
                    finite_max(&column).unwrap_or(f64::NAN),
                    finite_min(&column).unwrap_or(f64::NAN),
                ),
                CriterionMode::Minimize => (
                    finite_min(&column).unwrap_or(f64::NAN),
                    finite_max(&column).unwrap_or(f64::NAN),
                ),
                CriterionMode::TargetValue { .. } => {
                    // the ideal is the attained value nearest the weighted
                    // normalized target, the anti-ideal the farthest
                    let target = spec
                        .resolved_target(raw)
                        .map(|t| t / column_norm(raw) * w[j])
                        .unwrap_or(f64::NAN);
                    Self::nearest_and_farthest(&column, target)
                }
            };
            weighted.push(column);
            ideal.push(best);
            anti_ideal.push(worst);
        }

        let scores = (0..n)
            .map(|i| {
                let mut d_plus = 0.0;
                let mut d_minus = 0.0;
                for j in 0..specs.len() {
                    let v = weighted[j][i];
                    d_plus += (v - ideal[j]).powi(2);
                    d_minus += (v - anti_ideal[j]).powi(2);
                }
                let d_plus = d_plus.sqrt();
                let d_minus = d_minus.sqrt();
                d_minus / guard_denominator(d_plus + d_minus)
            })
            .collect();
        Ok(scores)
    }

    fn nearest_and_farthest(column: &[f64], target: f64) -> (f64, f64) {
        let mut nearest = f64::NAN;
        let mut farthest = f64::NAN;
        let mut nearest_distance = f64::INFINITY;
        let mut farthest_distance = f64::NEG_INFINITY;
        for &v in column {
            if !v.is_finite() {
                continue;
            }
            let distance = (v - target).abs();
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = v;
            }
            if distance > farthest_distance {
                farthest_distance = distance;
                farthest = v;
            }
        }
        (nearest, farthest)
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
    fn topsis_reproduces_reference_scores() {
        let (matrix, specs, weights) = worked_example();
        let scores = Topsis::score(&matrix, &specs, &weights).unwrap();
        let expected = [0.807319058, 0.463052460, 0.299704639];
        for (s, e) in scores.iter().zip(&expected) {
            assert!((s - e).abs() < 1e-6, "got {:?}", scores);
        }
    }

    #[test]
    fn topsis_scores_lie_in_unit_interval() {
        let (matrix, specs, weights) = worked_example();
        let scores = Topsis::score(&matrix, &specs, &weights).unwrap();
        assert!(scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn dominant_alternative_scores_highest() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["Best", "Mid", "Worst"])
            .column("Cost", vec![10.0, 20.0, 30.0])
            .column("Quality", vec![9.0, 5.0, 1.0])
            .build()
            .unwrap();
        let specs = vec![
            CriterionSpec::minimize("Cost"),
            CriterionSpec::maximize("Quality"),
        ];
        let (weights, _) = WeightResolver::resolve(&WeightPolicy::Uniform, &specs);

        let scores = Topsis::score(&matrix, &specs, &weights).unwrap();
        assert!(scores[0] > scores[1] && scores[1] > scores[2]);
    }

    #[test]
    fn topsis_propagates_nan() {
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

        let scores = Topsis::score(&matrix, &specs, &weights).unwrap();
        assert!(scores[1].is_nan());
        assert!(scores[0].is_finite() && scores[2].is_finite());
    }
}
