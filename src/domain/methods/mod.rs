//! Method engine - seven independent multi-criteria scorers.
//!
//! Each scorer is a stateless domain service consuming only the raw matrix,
//! the criterion specs, and the resolved weights, so every method can be
//! computed independently within a run. NaN cells propagate into the
//! affected alternative's score instead of vanishing into an aggregate.
//!
//! # Scorers
//!
//! - `Saw` - weighted sum over linear utilities
//! - `Waspas` - blend of weighted sum and weighted product
//! - `Moora` - benefit-minus-cost ratio system on vector-normalized columns
//! - `Topsis` - closeness to ideal / anti-ideal in weighted normalized space
//! - `Vikor` - compromise ranking from group utility and individual regret
//! - `Syai` - L1 closeness between weighted floored utilities and the
//!   per-criterion weighted ideal / anti-ideal
//! - `Cobra` - distance to reference solutions, two strategies

mod cobra;
mod moora;
mod saw;
mod syai;
mod topsis;
mod vikor;
mod waspas;

pub use cobra::{Cobra, CobraStrategy};
pub use moora::Moora;
pub use saw::Saw;
pub use syai::{Syai, SyaiAnalysis};
pub use topsis::Topsis;
pub use vikor::Vikor;
pub use waspas::Waspas;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BetterDirection, EngineError, UnitInterval};
use crate::domain::matrix::{CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::normalization::DEFAULT_UTILITY_FLOOR;

/// The seven scoring methods, in the canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Topsis,
    Vikor,
    Saw,
    Syai,
    Cobra,
    Waspas,
    Moora,
}

impl Method {
    /// All methods in reporting order.
    pub const ALL: [Method; 7] = [
        Method::Topsis,
        Method::Vikor,
        Method::Saw,
        Method::Syai,
        Method::Cobra,
        Method::Waspas,
        Method::Moora,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Topsis => "TOPSIS",
            Method::Vikor => "VIKOR",
            Method::Saw => "SAW",
            Method::Syai => "SYAI",
            Method::Cobra => "COBRA",
            Method::Waspas => "WASPAS",
            Method::Moora => "MOORA",
        }
    }

    /// Returns which way this method's scores order alternatives.
    pub fn direction(&self) -> BetterDirection {
        match self {
            Method::Vikor | Method::Cobra => BetterDirection::LowerIsBetter,
            _ => BetterDirection::HigherIsBetter,
        }
    }
}

/// Free parameters of the scoring methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodParams {
    /// SYAI closeness balance β.
    pub syai_beta: UnitInterval,
    /// VIKOR group-utility weight v.
    pub vikor_v: UnitInterval,
    /// WASPAS sum/product blend λ.
    pub waspas_lambda: UnitInterval,
    /// Floor C for floored normalization.
    pub utility_floor: UnitInterval,
    /// Which COBRA formula to apply.
    pub cobra_strategy: CobraStrategy,
}

impl Default for MethodParams {
    fn default() -> Self {
        Self {
            syai_beta: UnitInterval::HALF,
            vikor_v: UnitInterval::HALF,
            waspas_lambda: UnitInterval::HALF,
            utility_floor: UnitInterval::new(DEFAULT_UTILITY_FLOOR),
            cobra_strategy: CobraStrategy::default(),
        }
    }
}

/// Dispatcher over the seven scorers.
pub struct MethodEngine;

impl MethodEngine {
    /// Scores every alternative under one method.
    pub fn score(
        method: Method,
        matrix: &DecisionMatrix,
        specs: &[CriterionSpec],
        weights: &WeightVector,
        params: &MethodParams,
    ) -> Result<Vec<f64>, EngineError> {
        match method {
            Method::Saw => Saw::score(matrix, specs, weights),
            Method::Waspas => Waspas::score(matrix, specs, weights, params),
            Method::Moora => Moora::score(matrix, specs, weights, params),
            Method::Topsis => Topsis::score(matrix, specs, weights),
            Method::Vikor => Vikor::score(matrix, specs, weights, params),
            Method::Syai => Syai::score(matrix, specs, weights, params),
            Method::Cobra => Cobra::score(matrix, specs, weights, params),
        }
    }
}

/// Looks up a matrix column by criterion name.
pub(crate) fn matrix_column<'a>(
    matrix: &'a DecisionMatrix,
    name: &str,
) -> Result<&'a [f64], EngineError> {
    matrix
        .column(name)
        .ok_or_else(|| EngineError::UnknownCriterion(name.to_string()))
}

/// Aligns resolved weights to the criterion spec order.
pub(crate) fn aligned_weights(
    weights: &WeightVector,
    specs: &[CriterionSpec],
) -> Result<Vec<f64>, EngineError> {
    specs
        .iter()
        .map(|spec| {
            weights
                .get(&spec.name)
                .ok_or_else(|| EngineError::MissingWeight(spec.name.clone()))
        })
        .collect()
}
