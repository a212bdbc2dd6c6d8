//! Rank assignment - dense minimum-rank ties over a score vector.

use crate::domain::foundation::BetterDirection;

/// Turns scores into 1-based ranks: `rank = 1 + count of strictly better
/// scores`. Ties share the smallest possible rank. Non-finite scores
/// always rank behind every finite one.
pub struct RankResolver;

impl RankResolver {
    /// # Edge Cases
    ///
    /// - Equal scores get equal ranks (both second places are rank 2,
    ///   the next distinct score is rank 4 under four entries).
    /// - A NaN score ranks at `finite_count + 1`, after every finite
    ///   score regardless of direction.
    pub fn ranks(scores: &[f64], direction: BetterDirection) -> Vec<u32> {
        let finite_count = scores.iter().filter(|s| s.is_finite()).count() as u32;
        scores
            .iter()
            .map(|&score| {
                if !score.is_finite() {
                    return finite_count + 1;
                }
                let better = scores
                    .iter()
                    .filter(|other| other.is_finite())
                    .filter(|&&other| {
                        if direction.is_higher_better() {
                            other > score
                        } else {
                            other < score
                        }
                    })
                    .count() as u32;
                1 + better
            })
            .collect()
    }
}
