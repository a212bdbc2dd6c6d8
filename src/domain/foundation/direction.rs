//! Better-direction marker for method score vectors.

use serde::{Deserialize, Serialize};

/// Whether larger or smaller scores indicate a better alternative.
///
/// The direction is a per-method constant: it cannot be inferred from the
/// sign of a score (MOORA scores may be negative and are still
/// higher-is-better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetterDirection {
    HigherIsBetter,
    LowerIsBetter,
}

impl BetterDirection {
    /// Returns true if larger scores are better.
    pub fn is_higher_better(&self) -> bool {
        matches!(self, BetterDirection::HigherIsBetter)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BetterDirection::HigherIsBetter => "higher is better",
            BetterDirection::LowerIsBetter => "lower is better",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_is_better_flag() {
        assert!(BetterDirection::HigherIsBetter.is_higher_better());
        assert!(!BetterDirection::LowerIsBetter.is_higher_better());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(BetterDirection::HigherIsBetter.label(), "higher is better");
        assert_eq!(BetterDirection::LowerIsBetter.label(), "lower is better");
    }

    #[test]
    fn direction_serializes() {
        let json = serde_json::to_string(&BetterDirection::LowerIsBetter).unwrap();
        assert_eq!(json, "\"LowerIsBetter\"");
    }
}
