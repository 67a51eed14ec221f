//! Fitted track geometry.
//!
//! `TrackPoly` wraps the fitted coefficient vector and answers geometry
//! queries at arbitrary x: height, first and second derivatives, slope angle
//! and the radius of the osculating circle. Evaluation is pure; calling
//! outside the sampled x range extrapolates the polynomial (accuracy is not
//! guaranteed there, but it never fails).

use crate::domain::TrackPoint;
use crate::math::{polyder, polyval};

/// A fitted track polynomial, coefficients in descending powers.
///
/// The derivative coefficient vectors are pure coefficient algebra, so they
/// are computed once at construction and reused for every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoly {
    coeffs: Vec<f64>,
    dcoeffs: Vec<f64>,
    ddcoeffs: Vec<f64>,
}

impl TrackPoly {
    pub fn new(coeffs: Vec<f64>) -> Self {
        let dcoeffs = polyder(&coeffs);
        let ddcoeffs = polyder(&dcoeffs);
        Self {
            coeffs,
            dcoeffs,
            ddcoeffs,
        }
    }

    /// Coefficients in descending powers.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluate the track at `x`.
    ///
    /// The slope angle is `atan(-dydx)`, so a descending track yields a
    /// positive angle. The radius is signed like `d2ydx2`; at an inflection
    /// point the division by zero produces an infinity per IEEE semantics
    /// rather than an error, since the integrator never consumes the radius.
    pub fn evaluate(&self, x: f64) -> TrackPoint {
        let y = polyval(&self.coeffs, x);
        let dydx = polyval(&self.dcoeffs, x);
        let d2ydx2 = polyval(&self.ddcoeffs, x);
        let alpha = (-dydx).atan();
        let radius = (1.0 + dydx * dydx).powf(1.5) / d2ydx2;
        TrackPoint {
            y,
            dydx,
            d2ydx2,
            alpha,
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_track_is_flat() {
        let poly = TrackPoly::new(vec![0.42]);
        let p = poly.evaluate(1.7);
        assert_eq!(p.y, 0.42);
        assert_eq!(p.dydx, 0.0);
        assert_eq!(p.d2ydx2, 0.0);
        assert_eq!(p.alpha, 0.0);
        assert!(p.radius.is_infinite());
    }

    #[test]
    fn descending_track_has_positive_alpha() {
        // y = -x: slope -1 everywhere, alpha = atan(1) > 0.
        let poly = TrackPoly::new(vec![-1.0, 0.0]);
        let p = poly.evaluate(0.5);
        assert!((p.alpha - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn radius_sign_matches_second_derivative() {
        // y = x^2: d2ydx2 = 2 > 0, so the radius is positive.
        let up = TrackPoly::new(vec![1.0, 0.0, 0.0]);
        assert!(up.evaluate(0.3).radius > 0.0);

        // y = -x^2: concave, negative radius.
        let down = TrackPoly::new(vec![-1.0, 0.0, 0.0]);
        assert!(down.evaluate(0.3).radius < 0.0);
    }

    #[test]
    fn dydx_matches_central_finite_difference() {
        // p(x) = 0.5x^3 - 2x^2 + x + 3
        let poly = TrackPoly::new(vec![0.5, -2.0, 1.0, 3.0]);
        let h = 1e-6;
        for &x in &[-1.0, 0.0, 0.7, 2.5] {
            let numeric = (poly.evaluate(x + h).y - poly.evaluate(x - h).y) / (2.0 * h);
            let analytic = poly.evaluate(x).dydx;
            assert!(
                (numeric - analytic).abs() < 1e-6,
                "x={x}: numeric {numeric} vs analytic {analytic}"
            );
        }
    }

    #[test]
    fn curvature_of_parabola() {
        // y = x^2 at x = 0: dydx = 0, d2ydx2 = 2, R = 1/2.
        let poly = TrackPoly::new(vec![1.0, 0.0, 0.0]);
        let p = poly.evaluate(0.0);
        assert!((p.radius - 0.5).abs() < 1e-12);
    }
}
