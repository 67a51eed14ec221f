//! Write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted track:
//! - degree + coefficients (descending powers)
//! - the source data file
//! - a precomputed `(x, y)` grid over the input range for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CurveFile, CurveGrid, TRACK_DEGREE, TrackSample};
use crate::error::{AppError, ErrorKind};
use crate::track::TrackPoly;

/// Number of grid points written to the curve file.
const GRID_POINTS: usize = 101;

/// Write a curve JSON file for the fitted track.
pub fn write_curve_json(
    path: &Path,
    track: &TrackPoly,
    samples: &[TrackSample],
    source: &Path,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("failed to create curve JSON '{}': {e}", path.display()),
        )
    })?;

    let (x, y) = build_grid(track, samples);

    let curve = CurveFile {
        tool: "rolltrack".to_string(),
        source: source.display().to_string(),
        degree: TRACK_DEGREE,
        coefficients: track.coefficients().to_vec(),
        grid: CurveGrid { x, y },
    };

    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Sample the fitted curve over the observed x range.
///
/// Extrapolation beyond the samples is intentionally avoided; the degree-15
/// polynomial misbehaves quickly outside the fitted range.
fn build_grid(track: &TrackPoly, samples: &[TrackSample]) -> (Vec<f64>, Vec<f64>) {
    let mut x0 = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    for s in samples {
        x0 = x0.min(s.x);
        x1 = x1.max(s.x);
    }
    if !(x0.is_finite() && x1.is_finite()) || x1 <= x0 {
        x0 = 0.0;
        x1 = 1.0;
    }

    let mut xs = Vec::with_capacity(GRID_POINTS);
    let mut ys = Vec::with_capacity(GRID_POINTS);
    for i in 0..GRID_POINTS {
        let u = i as f64 / (GRID_POINTS as f64 - 1.0);
        let x = x0 + u * (x1 - x0);
        xs.push(x);
        ys.push(track.evaluate(x).y);
    }

    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_spans_the_sample_range() {
        let track = TrackPoly::new(vec![1.0, 0.0]);
        let samples = [
            TrackSample { t: 0.0, x: -0.5, y: -0.5 },
            TrackSample { t: 0.1, x: 1.5, y: 1.5 },
        ];
        let (xs, ys) = build_grid(&track, &samples);
        assert_eq!(xs.len(), GRID_POINTS);
        assert_eq!(xs[0], -0.5);
        assert_eq!(*xs.last().unwrap(), 1.5);
        assert!((ys[0] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_falls_back_to_unit_interval() {
        let track = TrackPoly::new(vec![2.0]);
        let (xs, _) = build_grid(&track, &[]);
        assert_eq!(xs[0], 0.0);
        assert_eq!(*xs.last().unwrap(), 1.0);
    }
}
