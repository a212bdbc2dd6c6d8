//! Cross-method agreement - pairwise correlation with significance.

use serde::{Deserialize, Serialize};

use crate::domain::numeric::{guard_denominator, two_tailed_p};

/// One entry of the symmetric agreement matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationCell {
    pub method_a: String,
    pub method_b: String,
    /// Pearson `r` or Spearman `ρ` depending on the matrix flavor.
    pub coefficient: f64,
    /// Two-tailed significance of the coefficient, in `[0, 1]`.
    pub p_value: f64,
}

/// Square, symmetric matrix of correlation cells between method outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementMatrix {
    pub methods: Vec<String>,
    cells: Vec<Vec<CorrelationCell>>,
}

impl AgreementMatrix {
    pub fn cell(&self, a: usize, b: usize) -> &CorrelationCell {
        &self.cells[a][b]
    }

    pub fn rows(&self) -> &[Vec<CorrelationCell>] {
        &self.cells
    }
}

/// Pairwise agreement over method score vectors.
///
/// Each unordered pair is computed once and mirrored; diagonal cells are
/// set to `r = 1, p = 0` by definition rather than computed. A vector
/// containing any non-finite value yields `(NaN, NaN)` cells for every
/// pair it touches.
pub struct AgreementAnalyzer;

impl AgreementAnalyzer {
    /// Pearson correlation between two equal-length vectors, clamped to
    /// `[-1, 1]`. Returns NaN on length mismatch, fewer than two points,
    /// or any non-finite input.
    pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
        if x.len() != y.len() || x.len() < 2 {
            return f64::NAN;
        }
        if !x.iter().chain(y).all(|v| v.is_finite()) {
            return f64::NAN;
        }
        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;
        let mut covariance = 0.0;
        let mut variance_x = 0.0;
        let mut variance_y = 0.0;
        for (&a, &b) in x.iter().zip(y) {
            covariance += (a - mean_x) * (b - mean_y);
            variance_x += (a - mean_x).powi(2);
            variance_y += (b - mean_y).powi(2);
        }
        let r = covariance / guard_denominator((variance_x * variance_y).sqrt());
        r.clamp(-1.0, 1.0)
    }

    /// Spearman rank correlation: Pearson over the average-rank
    /// transforms. Ties get the mean of their tied positions, which is
    /// deliberately looser than the minimum-rank rule used for method
    /// rank output.
    pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
        if x.len() != y.len() || !x.iter().chain(y).all(|v| v.is_finite()) {
            return f64::NAN;
        }
        Self::pearson(&Self::average_ranks(x), &Self::average_ranks(y))
    }

    /// Fractional ranks, 1 = smallest value, tied values averaged.
    pub fn average_ranks(values: &[f64]) -> Vec<f64> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        let mut ranks = vec![0.0; values.len()];
        let mut start = 0;
        while start < order.len() {
            let mut end = start;
            while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
                end += 1;
            }
            // 1-based positions start+1 ..= end+1 averaged
            let rank = (start + end + 2) as f64 / 2.0;
            for &index in &order[start..=end] {
                ranks[index] = rank;
            }
            start = end + 1;
        }
        ranks
    }

    /// Pearson agreement matrix over raw score vectors.
    pub fn score_agreement(methods: &[String], vectors: &[Vec<f64>]) -> AgreementMatrix {
        Self::build(methods, vectors, Self::pearson)
    }

    /// Spearman agreement matrix over the same vectors.
    pub fn rank_agreement(methods: &[String], vectors: &[Vec<f64>]) -> AgreementMatrix {
        Self::build(methods, vectors, Self::spearman)
    }

    fn build(
        methods: &[String],
        vectors: &[Vec<f64>],
        correlate: fn(&[f64], &[f64]) -> f64,
    ) -> AgreementMatrix {
        let k = methods.len();
        let mut cells: Vec<Vec<CorrelationCell>> = (0..k)
            .map(|a| {
                (0..k)
                    .map(|b| CorrelationCell {
                        method_a: methods[a].clone(),
                        method_b: methods[b].clone(),
                        coefficient: 1.0,
                        p_value: 0.0,
                    })
                    .collect()
            })
            .collect();

        for a in 0..k {
            for b in (a + 1)..k {
                let coefficient = correlate(&vectors[a], &vectors[b]);
                let p_value = two_tailed_p(coefficient, vectors[a].len());
                cells[a][b].coefficient = coefficient;
                cells[a][b].p_value = p_value;
                cells[b][a].coefficient = coefficient;
                cells[b][a].p_value = p_value;
            }
        }

        AgreementMatrix {
            methods: methods.to_vec(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYAI: [f64; 5] = [0.5, 0.361111111, 0.555555556, 0.444444444, 0.666666667];
    const TOPSIS: [f64; 5] = [0.461676958, 0.364205267, 0.497995234, 0.416547709, 0.660695494];
    const VIKOR: [f64; 5] = [0.772727273, 0.5, 0.681818182, 0.863636364, 0.5];

    #[test]
    fn pearson_reproduces_reference_values() {
        assert!((AgreementAnalyzer::pearson(&SYAI, &TOPSIS) - 0.977163967).abs() < 1e-6);
        assert!((AgreementAnalyzer::pearson(&SYAI, &VIKOR) - -0.195446903).abs() < 1e-6);
    }

    #[test]
    fn pearson_of_a_vector_with_itself_is_one() {
        assert!((AgreementAnalyzer::pearson(&SYAI, &SYAI) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_rejects_degenerate_input() {
        assert!(AgreementAnalyzer::pearson(&[1.0], &[2.0]).is_nan());
        assert!(AgreementAnalyzer::pearson(&[1.0, 2.0], &[2.0]).is_nan());
        assert!(AgreementAnalyzer::pearson(&[1.0, f64::NAN], &[2.0, 3.0]).is_nan());
    }

    #[test]
    fn constant_vector_correlates_at_zero_not_infinity() {
        // zero variance hits the epsilon-guarded denominator
        let r = AgreementAnalyzer::pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]);
        assert!((r - 0.0).abs() < 1e-9);
    }

    #[test]
    fn average_ranks_split_ties_evenly() {
        let ranks = AgreementAnalyzer::average_ranks(&[3.0, 1.0, 3.0, 2.0]);
        assert_eq!(ranks, vec![3.5, 1.0, 3.5, 2.0]);
    }

    #[test]
    fn spearman_is_one_for_monotone_pairs() {
        let rho = AgreementAnalyzer::spearman(&SYAI, &TOPSIS);
        assert!((rho - 1.0).abs() < 1e-12);
    }

    #[test]
    fn score_agreement_matrix_is_symmetric_with_unit_diagonal() {
        let methods = vec!["SYAI".to_string(), "TOPSIS".to_string(), "VIKOR".to_string()];
        let vectors = vec![SYAI.to_vec(), TOPSIS.to_vec(), VIKOR.to_vec()];
        let matrix = AgreementAnalyzer::score_agreement(&methods, &vectors);

        for a in 0..3 {
            assert!((matrix.cell(a, a).coefficient - 1.0).abs() < 1e-12);
            assert_eq!(matrix.cell(a, a).p_value, 0.0);
            for b in 0..3 {
                assert_eq!(
                    matrix.cell(a, b).coefficient.to_bits(),
                    matrix.cell(b, a).coefficient.to_bits()
                );
            }
        }
        assert!((matrix.cell(0, 1).p_value - 0.004128303).abs() < 1e-6);
        assert!((matrix.cell(0, 2).p_value - 0.752742808).abs() < 1e-6);
    }

    #[test]
    fn rank_agreement_flags_perfect_monotone_agreement() {
        let methods = vec!["SYAI".to_string(), "TOPSIS".to_string()];
        let vectors = vec![SYAI.to_vec(), TOPSIS.to_vec()];
        let matrix = AgreementAnalyzer::rank_agreement(&methods, &vectors);

        assert!((matrix.cell(0, 1).coefficient - 1.0).abs() < 1e-12);
        assert!(matrix.cell(0, 1).p_value < 1e-6);
    }

    #[test]
    fn nan_vector_yields_nan_cells_off_diagonal() {
        let methods = vec!["A".to_string(), "B".to_string()];
        let vectors = vec![vec![1.0, f64::NAN, 3.0], vec![1.0, 2.0, 3.0]];
        let matrix = AgreementAnalyzer::score_agreement(&methods, &vectors);

        assert!(matrix.cell(0, 1).coefficient.is_nan());
        assert!(matrix.cell(0, 1).p_value.is_nan());
        assert!((matrix.cell(0, 0).coefficient - 1.0).abs() < 1e-12);
    }
}
