//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be:
//!
//! - used in-memory during fitting and integration
//! - exported to CSV/JSON
//! - reloaded later for comparisons

use serde::{Deserialize, Serialize};

/// Fixed degree of the track polynomial.
///
/// Tracker exports are dense enough that a degree-15 least-squares fit smooths
/// measurement jitter while following the physical track shape closely.
pub const TRACK_DEGREE: usize = 15;

/// One row of Tracker-exported position data.
///
/// The timestamp is carried through ingest for diagnostics but the fit is
/// purely `y` as a function of `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    /// Recording timestamp (seconds). Not used by the fit.
    pub t: f64,
    /// Horizontal position (meters).
    pub x: f64,
    /// Vertical position (meters).
    pub y: f64,
}

/// Track geometry evaluated at a single x.
///
/// Recomputed on every call; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Height of the track, `p(x)`.
    pub y: f64,
    /// First derivative `p'(x)`.
    pub dydx: f64,
    /// Second derivative `p''(x)`.
    pub d2ydx2: f64,
    /// Slope angle `atan(-dydx)`; positive where the track descends.
    pub alpha: f64,
    /// Signed radius of the osculating circle. Sign matches `d2ydx2`;
    /// infinite or NaN at an inflection point.
    pub radius: f64,
}

/// Physical and numerical parameters of the motion simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Simulation horizon (seconds).
    pub end_time: f64,
    /// Fixed integration step (seconds).
    pub step_size: f64,
    /// Gravitational acceleration (m/s^2).
    pub gravity: f64,
    /// Rolling-inertia correction for a solid sphere rolling without
    /// slipping: along-track acceleration is `(3/5) g sin(alpha)`.
    pub inertia_factor: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            end_time: 0.9,
            step_size: 0.001,
            gravity: 9.81,
            inertia_factor: 3.0 / 5.0,
        }
    }
}

impl SimConfig {
    /// Fixed iteration count: `floor(end_time / step_size)`.
    pub fn step_count(&self) -> usize {
        (self.end_time / self.step_size) as usize
    }
}

/// One recorded integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimStep {
    /// Zero-based step index.
    pub step: usize,
    /// Simulated time at the end of the step (seconds).
    pub t: f64,
    /// Nominal grid point `step * step_size` where geometry was sampled.
    pub grid_x: f64,
    /// Evolving track position after the position update.
    pub x: f64,
    /// Velocity after the velocity update (m/s).
    pub v: f64,
}

/// Portable representation of a fitted track curve.
///
/// Written by `--export-curve`; holds the coefficients plus a precomputed
/// `(x, y)` grid for quick plotting in downstream tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    /// Path of the data file the curve was fitted from.
    pub source: String,
    pub degree: usize,
    /// Coefficients in descending powers.
    pub coefficients: Vec<f64>,
    pub grid: CurveGrid,
}

/// Sampled curve values over the input x range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_runs_900_steps() {
        let config = SimConfig::default();
        assert_eq!(config.step_count(), 900);
    }

    #[test]
    fn step_count_truncates_partial_steps() {
        let config = SimConfig {
            end_time: 0.95,
            step_size: 0.1,
            ..SimConfig::default()
        };
        assert_eq!(config.step_count(), 9);
    }
}
