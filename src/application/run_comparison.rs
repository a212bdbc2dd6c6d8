//! Comparison runner - one full scoring run across all methods.
//!
//! Validates the inputs, resolves weights, scores every method, ranks the
//! results, and computes the cross-method agreement matrices. This is the
//! single entry point a presentation layer calls; the domain services
//! below it stay independently usable.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::agreement::{AgreementAnalyzer, AgreementMatrix};
use crate::domain::foundation::{BetterDirection, EngineError, EngineWarning};
use crate::domain::matrix::{
    CriterionMode, CriterionSpec, DecisionMatrix, WeightPolicy, WeightResolver, WeightVector,
};
use crate::domain::methods::{Method, MethodEngine, MethodParams};
use crate::domain::numeric::{finite_max, finite_mean, finite_min};
use crate::domain::ranking::RankResolver;

/// Scores and ranks of one method, aligned to the alternative order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodOutcome {
    pub method: Method,
    pub direction: BetterDirection,
    pub scores: Vec<f64>,
    pub ranks: Vec<u32>,
}

/// Everything one run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub alternatives: Vec<String>,
    /// One outcome per method, in the canonical reporting order.
    pub outcomes: Vec<MethodOutcome>,
    /// Pearson agreement over raw score vectors.
    pub score_agreement: AgreementMatrix,
    /// Spearman agreement over the same vectors.
    pub rank_agreement: AgreementMatrix,
    pub weights: WeightVector,
    pub warnings: Vec<EngineWarning>,
}

/// Runs the seven scorers and the agreement analysis over one matrix.
pub struct ComparisonRunner;

impl ComparisonRunner {
    /// # Errors
    ///
    /// Fails fast on an empty or malformed matrix, on a spec list that
    /// does not cover exactly the matrix criteria, or on any scorer
    /// error. Data-quality findings (NaN cells, degenerate columns,
    /// weight fallbacks, missing targets) are surfaced as warnings in
    /// the report instead.
    pub fn run(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        policy: &WeightPolicy,
        params: &MethodParams,
    ) -> Result<ComparisonReport, EngineError> {
        matrix.validate()?;
        Self::check_spec_alignment(matrix, specs)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "starting comparison run"
        );

        let (weights, mut warnings) = WeightResolver::resolve(policy, specs);
        warnings.extend(Self::scan_data_quality(matrix, specs));
        for warning in &warnings {
            warn!(%warning, "data-quality finding");
        }

        let mut outcomes = Vec::with_capacity(Method::ALL.len());
        for method in Method::ALL {
            let scores = MethodEngine::score(method, matrix, specs, &weights, params)?;
            let ranks = RankResolver::ranks(&scores, method.direction());
            outcomes.push(MethodOutcome {
                method,
                direction: method.direction(),
                scores,
                ranks,
            });
        }

        let labels: Vec<String> = Method::ALL.iter().map(|m| m.label().to_string()).collect();
        let vectors: Vec<Vec<f64>> = outcomes.iter().map(|o| o.scores.clone()).collect();
        let score_agreement = AgreementAnalyzer::score_agreement(&labels, &vectors);
        let rank_agreement = AgreementAnalyzer::rank_agreement(&labels, &vectors);

        Ok(ComparisonReport {
            alternatives: matrix.alternatives.clone(),
            outcomes,
            score_agreement,
            rank_agreement,
            weights,
            warnings,
        })
    }

    /// The spec list must name exactly the matrix criteria: same count,
    /// no duplicates, every name a column. Together these guarantee full
    /// coverage, so no criterion can be silently dropped from a run.
    fn check_spec_alignment(
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
    ) -> Result<(), EngineError> {
        if specs.len() != matrix.criterion_count() {
            return Err(EngineError::SpecCountMismatch {
                expected: matrix.criterion_count(),
                actual: specs.len(),
            });
        }
        for (index, spec) in specs.iter().enumerate() {
            if specs[..index].iter().any(|other| other.name == spec.name) {
                return Err(EngineError::DuplicateCriterion(spec.name.clone()));
            }
            if matrix.column(&spec.name).is_none() {
                return Err(EngineError::UnknownCriterion(spec.name.clone()));
            }
        }
        Ok(())
    }

    fn scan_data_quality(matrix: &DecisionMatrix, specs: &[CriterionSpec]) -> Vec<EngineWarning> {
        let mut warnings = Vec::new();
        for spec in specs {
            let Some(column) = matrix.column(&spec.name) else {
                continue;
            };
            for (i, value) in column.iter().enumerate() {
                if value.is_nan() {
                    warnings.push(EngineWarning::NonNumericCell {
                        alternative: matrix.alternatives[i].clone(),
                        criterion: spec.name.clone(),
                    });
                }
            }
            if let (Some(max), Some(min)) = (finite_max(column), finite_min(column)) {
                if (max - min).abs() <= f64::EPSILON {
                    warnings.push(EngineWarning::DegenerateCriterion {
                        criterion: spec.name.clone(),
                    });
                }
            }
            if matches!(spec.mode, CriterionMode::TargetValue { target: None }) {
                if let Some(fallback) = finite_mean(column) {
                    warnings.push(EngineWarning::MissingTargetFallback {
                        criterion: spec.name.clone(),
                        fallback,
                    });
                }
            }
        }
        warnings
    }
}
