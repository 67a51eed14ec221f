//! Least-squares polynomial fit of `y(x)`.
//!
//! Given samples `(x_i, y_i)` we build the Vandermonde design matrix in
//! descending powers and solve the ordinary least-squares problem with SVD.
//! The track fit always uses degree 15 (`TRACK_DEGREE`); the generic
//! `fit_polynomial` exists so lower degrees are testable with tight
//! round-trip tolerances, which the ill-conditioned degree-15 system does
//! not permit.

use nalgebra::{DMatrix, DVector};

use crate::domain::{TRACK_DEGREE, TrackSample};
use crate::error::{AppError, ErrorKind};
use crate::math::solve_least_squares;
use crate::track::TrackPoly;

/// Fit a degree-`TRACK_DEGREE` track polynomial to the samples.
///
/// Timestamps are ignored; the fit is `y` as a function of `x`.
pub fn fit_track(samples: &[TrackSample]) -> Result<TrackPoly, AppError> {
    let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.y).collect();
    let coeffs = fit_polynomial(&xs, &ys, TRACK_DEGREE)?;
    Ok(TrackPoly::new(coeffs))
}

/// Fit a polynomial of the given degree, returning coefficients in
/// descending powers (length `degree + 1`).
pub fn fit_polynomial(xs: &[f64], ys: &[f64], degree: usize) -> Result<Vec<f64>, AppError> {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len();
    let cols = degree + 1;
    if n < cols {
        return Err(AppError::new(
            ErrorKind::Fit,
            format!("degree-{degree} fit needs at least {cols} samples, got {n}"),
        ));
    }

    // SVD would still produce a minimum-norm answer for rank-deficient data
    // (e.g. every x duplicated), which is not the fit the caller asked for.
    // Require enough distinct abscissae up front.
    if distinct_count(xs) < cols {
        return Err(AppError::new(
            ErrorKind::Fit,
            format!("degenerate sample data: degree-{degree} fit needs {cols} distinct x values"),
        ));
    }

    let design = vandermonde(xs, degree);
    let y = DVector::from_column_slice(ys);

    let solution = solve_least_squares(&design, &y).ok_or_else(|| {
        AppError::new(
            ErrorKind::Fit,
            format!("degenerate sample data: degree-{degree} least-squares system is singular"),
        )
    })?;

    Ok(solution.iter().copied().collect())
}

fn distinct_count(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();
    sorted.len()
}

/// Vandermonde matrix in descending powers: row i is
/// `[x_i^degree, ..., x_i, 1]`.
fn vandermonde(xs: &[f64], degree: usize) -> DMatrix<f64> {
    let cols = degree + 1;
    DMatrix::from_fn(xs.len(), cols, |r, c| xs[r].powi((degree - c) as i32))
}
