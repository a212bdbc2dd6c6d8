//! VIKOR - compromise ranking from group utility and individual regret.

use crate::domain::foundation::EngineError;
use crate::domain::matrix::{CriterionMode, CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::numeric::{finite_max, finite_min};

use super::{aligned_weights, matrix_column};

/// VIKOR: per-criterion regret toward the best attained value, aggregated
/// as group utility `S` (sum) and individual regret `R` (max), both
/// rescaled to `[0, 1]` by their own extrema and blended into
/// `Q = v·S̃ + (1-v)·R̃`. Lower is better.
///
/// Goal criteria are folded in as distance-to-target cost columns, so the
/// best attained value is the one nearest the target.
pub struct Vikor;

impl Vikor {
    /// Scores every alternative (the Q value).
    pub fn score(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &super::MethodParams,
    ) -> Result<Vec<f64>, EngineError> {
        let v = params.vikor_v.value();
        let w = aligned_weights(weights, specs)?;
        let n = matrix.alternative_count();

        let mut group_utility = vec![0.0_f64; n];
        let mut individual_regret = vec![0.0_f64; n];

        for (j, spec) in specs.iter().enumerate() {
            let raw = matrix_column(matrix, &spec.name)?;
            // goal columns become distance-to-target cost columns
            let column: Vec<f64> = match spec.resolved_target(raw) {
                Some(target) => raw.iter().map(|&x| (x - target).abs()).collect(),
                None => raw.to_vec(),
            };
            let higher_is_best =
                matches!(spec.mode, CriterionMode::Maximize) && !spec.mode.is_goal();

            let (best, worst) = if higher_is_best {
                (finite_max(&column), finite_min(&column))
            } else {
                (finite_min(&column), finite_max(&column))
            };
            let (best, worst) = match (best, worst) {
                (Some(best), Some(worst)) => (best, worst),
                _ => continue,
            };
            let span = (best - worst).abs();
            // a degenerate column contributes no regret
            if span <= f64::EPSILON {
                for i in 0..n {
                    if column[i].is_nan() {
                        group_utility[i] = f64::NAN;
                        individual_regret[i] = f64::NAN;
                    }
                }
                continue;
            }

            for i in 0..n {
                let term = w[j] * (column[i] - best).abs() / span;
                group_utility[i] += term;
                individual_regret[i] = if individual_regret[i].is_nan() || term.is_nan() {
                    f64::NAN
                } else {
                    individual_regret[i].max(term)
                };
            }
        }

        let scores = {
            let s_min = finite_min(&group_utility).unwrap_or(0.0);
            let s_max = finite_max(&group_utility).unwrap_or(0.0);
            let r_min = finite_min(&individual_regret).unwrap_or(0.0);
            let r_max = finite_max(&individual_regret).unwrap_or(0.0);
            let s_span = s_max - s_min;
            let r_span = r_max - r_min;

            (0..n)
                .map(|i| {
                    let s_scaled = if group_utility[i].is_nan() {
                        f64::NAN
                    } else if s_span > f64::EPSILON {
                        (group_utility[i] - s_min) / s_span
                    } else {
                        0.0
                    };
                    let r_scaled = if individual_regret[i].is_nan() {
                        f64::NAN
                    } else if r_span > f64::EPSILON {
                        (individual_regret[i] - r_min) / r_span
                    } else {
                        0.0
                    };
                    v * s_scaled + (1.0 - v) * r_scaled
                })
                .collect()
        };
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::super::MethodParams;
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
    fn vikor_reproduces_reference_scores() {
        let (matrix, specs, weights) = worked_example();
        let scores = Vikor::score(&matrix, &specs, &weights, &MethodParams::default()).unwrap();
        let expected = [0.0, 0.75, 1.0];
        for (s, e) in scores.iter().zip(&expected) {
            assert!((s - e).abs() < 1e-6, "got {:?}", scores);
        }
    }

    #[test]
    fn best_compromise_gets_zero() {
        let (matrix, specs, weights) = worked_example();
        let scores = Vikor::score(&matrix, &specs, &weights, &MethodParams::default()).unwrap();
        // the S and R minimizer sits at Q = 0 after rescaling
        assert!(scores.iter().any(|&s| s.abs() < 1e-9));
        assert!(scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn degenerate_column_contributes_no_regret() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["A", "B"])
            .column("Cost", vec![10.0, 20.0])
            .column("Flat", vec![5.0, 5.0])
            .build()
            .unwrap();
        let specs = vec![
            CriterionSpec::minimize("Cost"),
            CriterionSpec::maximize("Flat"),
        ];
        let (weights, _) = WeightResolver::resolve(&WeightPolicy::Uniform, &specs);

        let scores = Vikor::score(&matrix, &specs, &weights, &MethodParams::default()).unwrap();
        assert!((scores[0] - 0.0).abs() < 1e-9);
        assert!((scores[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn vikor_propagates_nan() {
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

        let scores = Vikor::score(&matrix, &specs, &weights, &MethodParams::default()).unwrap();
        assert!(scores[1].is_nan());
        assert!(scores[0].is_finite() && scores[2].is_finite());
    }
}
