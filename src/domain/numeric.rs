//! Shared numeric primitives: finite-aware column statistics and the
//! special functions behind correlation significance.
//!
//! Column statistics skip NaN cells so a single bad value never corrupts the
//! extrema or means other alternatives are normalized against; the bad cell
//! itself stays NaN and is propagated by the scorers.

/// Smallest value a denominator is allowed to take. NaN passes through so
/// propagation stays visible.
pub fn guard_denominator(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value.max(f64::EPSILON)
    }
}

/// Minimum over the finite values of a column.
pub fn finite_min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
}

/// Maximum over the finite values of a column.
pub fn finite_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

/// Mean over the finite values of a column.
pub fn finite_mean(values: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    Some(finite.iter().sum::<f64>() / finite.len() as f64)
}

/// Euclidean norm of the finite values of a column, floored at 1.0 when the
/// column is all zeros so division stays defined.
pub fn column_norm(values: &[f64]) -> f64 {
    let sum_sq: f64 = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .map(|v| v * v)
        .sum();
    let norm = sum_sq.sqrt();
    if norm > 0.0 {
        norm
    } else {
        1.0
    }
}

/// Vector-normalizes a column: `x / sqrt(Σ x²)`. NaN cells stay NaN.
pub fn vector_normalize(values: &[f64]) -> Vec<f64> {
    let norm = column_norm(values);
    values.iter().map(|&v| v / norm).collect()
}

// ---------------------------------------------------------------------------
// Special functions for Student-t significance
// ---------------------------------------------------------------------------

/// Lanczos g=7 coefficients.
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function, Lanczos approximation.
///
/// Uses the reflection formula for arguments below 0.5.
pub fn ln_gamma(z: f64) -> f64 {
    if z < 0.5 {
        return std::f64::consts::PI.ln()
            - (std::f64::consts::PI * z).sin().ln()
            - ln_gamma(1.0 - z);
    }
    let z = z - 1.0;
    let mut x = LANCZOS_COEFFICIENTS[0];
    for (i, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        x += coefficient / (z + i as f64);
    }
    let t = z + LANCZOS_G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (z + 0.5) * t.ln() - t + x.ln()
}

/// Natural log of the beta function.
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Continued-fraction expansion for the incomplete beta function
/// (Lentz's algorithm).
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITERATIONS: usize = 200;
    const EPS: f64 = 3e-7;
    const FPMIN: f64 = 1e-30;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < FPMIN {
        d = FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m = m as f64;
        let m2 = 2.0 * m;

        let mut aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h
}

/// Regularized incomplete beta function `I_x(a, b)`.
pub fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let front = (a * x.ln() + b * (1.0 - x).ln() - ln_beta(a, b)).exp();
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Cumulative distribution of Student's t with `df` degrees of freedom.
pub fn student_t_cdf(t: f64, df: f64) -> f64 {
    let x = df / (df + t * t);
    let ib = regularized_incomplete_beta(df / 2.0, 0.5, x);
    if t > 0.0 {
        1.0 - 0.5 * ib
    } else {
        0.5 * ib
    }
}

/// Two-tailed p-value for a correlation coefficient `r` over `n` samples.
///
/// `t = |r|·sqrt(df / (1 - r²))` with `df = n - 2`; `df <= 0` yields `p = 1`
/// by convention. The result is clamped to `[0, 1]`; NaN input propagates.
pub fn two_tailed_p(r: f64, n: usize) -> f64 {
    if r.is_nan() {
        return f64::NAN;
    }
    if n < 3 {
        return 1.0;
    }
    let df = (n - 2) as f64;
    let t = r.abs() * (df / (1.0 - r * r + 1e-12)).sqrt();
    let p = 2.0 * (1.0 - student_t_cdf(t, df));
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn finite_stats_skip_nan() {
        let column = [3.0, f64::NAN, 1.0, 2.0];
        assert_eq!(finite_min(&column), Some(1.0));
        assert_eq!(finite_max(&column), Some(3.0));
        assert!((finite_mean(&column).unwrap() - 2.0).abs() < TOL);
    }

    #[test]
    fn finite_stats_empty_for_all_nan() {
        let column = [f64::NAN, f64::NAN];
        assert_eq!(finite_min(&column), None);
        assert_eq!(finite_max(&column), None);
        assert_eq!(finite_mean(&column), None);
    }

    #[test]
    fn vector_normalize_has_unit_norm() {
        let normalized = vector_normalize(&[3.0, 4.0]);
        assert!((normalized[0] - 0.6).abs() < TOL);
        assert!((normalized[1] - 0.8).abs() < TOL);
    }

    #[test]
    fn vector_normalize_keeps_nan_cells() {
        let normalized = vector_normalize(&[3.0, f64::NAN, 4.0]);
        assert!(normalized[1].is_nan());
        assert!((normalized[0] - 0.6).abs() < TOL);
    }

    #[test]
    fn vector_normalize_all_zero_column() {
        let normalized = vector_normalize(&[0.0, 0.0]);
        assert_eq!(normalized, vec![0.0, 0.0]);
    }

    #[test]
    fn guard_denominator_floors_zero() {
        assert_eq!(guard_denominator(0.0), f64::EPSILON);
        assert_eq!(guard_denominator(2.0), 2.0);
        assert!(guard_denominator(f64::NAN).is_nan());
    }

    #[test]
    fn ln_gamma_matches_reference_values() {
        // lgamma(0.5) = ln(sqrt(pi)), lgamma(5) = ln(24)
        assert!((ln_gamma(0.5) - 0.572_364_942_925).abs() < 1e-10);
        assert!((ln_gamma(5.0) - 3.178_053_830_348).abs() < 1e-10);
        assert!((ln_gamma(0.25) - 1.288_022_524_698).abs() < 1e-10);
        assert!((ln_gamma(1.0)).abs() < 1e-10);
    }

    #[test]
    fn incomplete_beta_matches_closed_form() {
        // I_x(2,3) = 6x^2 - 8x^3 + 3x^4
        let x: f64 = 0.4;
        let expected = 6.0 * x.powi(2) - 8.0 * x.powi(3) + 3.0 * x.powi(4);
        assert!((regularized_incomplete_beta(2.0, 3.0, x) - expected).abs() < 1e-7);
    }

    #[test]
    fn incomplete_beta_boundary_values() {
        assert_eq!(regularized_incomplete_beta(2.0, 3.0, 0.0), 0.0);
        assert_eq!(regularized_incomplete_beta(2.0, 3.0, 1.0), 1.0);
    }

    #[test]
    fn student_t_cdf_is_half_at_zero() {
        assert!((student_t_cdf(0.0, 5.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn two_tailed_p_df_one_closed_form() {
        // df = 1 is a Cauchy distribution: p(r=0.5, n=3) = 2/3.
        assert!((two_tailed_p(0.5, 3) - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn two_tailed_p_reference_values() {
        assert!((two_tailed_p(0.8, 5) - 0.104_088_037).abs() < 1e-6);
        assert!((two_tailed_p(0.9, 10) - 0.000_387_156).abs() < 1e-6);
    }

    #[test]
    fn two_tailed_p_degenerate_sample_size() {
        assert_eq!(two_tailed_p(0.9, 2), 1.0);
        assert_eq!(two_tailed_p(0.9, 0), 1.0);
    }

    #[test]
    fn two_tailed_p_zero_correlation_is_one() {
        assert!((two_tailed_p(0.0, 10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_tailed_p_perfect_correlation_is_zero() {
        assert!(two_tailed_p(1.0, 4) < 1e-9);
    }

    #[test]
    fn two_tailed_p_propagates_nan() {
        assert!(two_tailed_p(f64::NAN, 10).is_nan());
    }
}
