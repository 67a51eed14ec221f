//! Least squares solver.
//!
//! The track fit is a single ordinary least-squares problem of the form:
//!
//! ```text
//! minimize Σ (y_i - v_i^T c)^2
//! ```
//!
//! where `v_i` is the Vandermonde row of sample `x_i` and `c` the coefficient
//! vector.
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly even when the
//!   design matrix is tall (more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - A degree-15 Vandermonde matrix is severely ill-conditioned, so we try
//!   progressively looser singular-value tolerances before giving up.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly, or
/// if every tolerance yields a non-finite solution.
pub fn solve_least_squares(a: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = a.clone().svd(true, true);

    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(c) = svd.solve(y, tol) {
            if c.iter().all(|v| v.is_finite()) {
                return Some(c);
            }
        }
    }

    None
}
