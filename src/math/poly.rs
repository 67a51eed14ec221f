//! Dense polynomial evaluation and differentiation.
//!
//! Coefficients are stored in **descending** powers throughout this crate:
//! `coeffs[0]` multiplies `x^(n-1)` and `coeffs[n-1]` is the constant term.
//! This matches the order the fitter produces and the order the program
//! prints.

/// Evaluate a polynomial at `x` with Horner's method.
///
/// An empty coefficient slice evaluates to 0.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Analytic derivative as coefficient algebra.
///
/// Each coefficient is multiplied by its power and the constant term is
/// dropped, so a degree-n vector becomes degree-(n-1). The derivative of a
/// constant (or empty) polynomial is the empty vector, which `polyval`
/// evaluates to 0.
pub fn polyder(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    if n <= 1 {
        return Vec::new();
    }
    coeffs[..n - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (n - 1 - i) as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_direct_expansion() {
        // p(x) = 2x^3 - x^2 + 4x - 7
        let p = [2.0, -1.0, 4.0, -7.0];
        for &x in &[-2.0_f64, -0.5, 0.0, 1.0, 3.25] {
            let direct = 2.0 * x.powi(3) - x.powi(2) + 4.0 * x - 7.0;
            assert!((polyval(&p, x) - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_drops_constant_term() {
        // d/dx (2x^3 - x^2 + 4x - 7) = 6x^2 - 2x + 4
        let p = [2.0, -1.0, 4.0, -7.0];
        assert_eq!(polyder(&p), vec![6.0, -2.0, 4.0]);
    }

    #[test]
    fn derivative_of_constant_is_empty() {
        assert!(polyder(&[5.0]).is_empty());
        assert!(polyder(&[]).is_empty());
        assert_eq!(polyval(&polyder(&[5.0]), 3.0), 0.0);
    }

    #[test]
    fn second_derivative_by_repeated_polyder() {
        let p = [2.0, -1.0, 4.0, -7.0];
        let ddp = polyder(&polyder(&p));
        // p'' = 12x - 2
        assert_eq!(ddp, vec![12.0, -2.0]);
    }
}
