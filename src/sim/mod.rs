//! Fixed-step motion integration along the fitted track.
//!
//! The scheme is an explicit Euler stepper for a ball rolling without
//! slipping, driven by the track geometry:
//!
//! - the velocity update uses the acceleration computed at the end of the
//!   previous step
//! - the position update rescales the Euler step by a local arc-length term
//! - the acceleration for the next step projects gravity onto the slope at
//!   the updated position, corrected by the rolling-inertia factor
//!
//! The established lab procedure this tool replicates puts the curvature
//! `d2ydx2`, not the slope, under the square root of the arc-length term. A
//! standard arc-length correction would use `sqrt(1 + dydx^2)`. The literal
//! formula is kept so that outputs stay comparable with earlier analyses;
//! see DESIGN.md.
//!
//! `grid_x` is the nominal sampling point `i * step_size` and `x` is the
//! simulated position. They are deliberately separate variables, and the
//! evaluate/update order below is load-bearing for reproducibility.

use crate::domain::{SimConfig, SimStep};
use crate::error::{AppError, ErrorKind};
use crate::track::TrackPoly;

/// Run the fixed-horizon simulation and return one record per step.
///
/// State starts at rest at the origin: `(x, v, dvdt) = (0, 0, 0)`.
pub fn simulate(track: &TrackPoly, config: &SimConfig) -> Result<Vec<SimStep>, AppError> {
    // These come straight from the CLI. A zero step size would make the
    // step count saturate to usize::MAX; a negative one would silently run
    // zero steps.
    if !(config.step_size.is_finite() && config.step_size > 0.0) {
        return Err(AppError::new(
            ErrorKind::NumericDomain,
            format!(
                "step size {} is not a positive finite number",
                config.step_size
            ),
        ));
    }
    if !(config.end_time.is_finite() && config.end_time >= 0.0) {
        return Err(AppError::new(
            ErrorKind::NumericDomain,
            format!(
                "end time {} is not a non-negative finite number",
                config.end_time
            ),
        ));
    }

    let n = config.step_count();
    let mut steps = Vec::with_capacity(n);

    let mut x = 0.0_f64;
    let mut v = 0.0_f64;
    let mut dvdt = 0.0_f64;

    for i in 0..n {
        let grid_x = i as f64 * config.step_size;
        let at_grid = track.evaluate(grid_x);

        v += config.step_size * dvdt;

        let arc = 1.0 + at_grid.d2ydx2;
        if arc <= 0.0 {
            return Err(AppError::new(
                ErrorKind::NumericDomain,
                format!(
                    "arc-length term 1 + d2ydx2 = {arc} is not positive at step {i} (grid_x = {grid_x})"
                ),
            ));
        }
        x += config.step_size * v / arc.sqrt();

        let at_x = track.evaluate(x);
        dvdt = config.inertia_factor * config.gravity * at_x.alpha.sin();

        steps.push(SimStep {
            step: i,
            t: (i + 1) as f64 * config.step_size,
            grid_x,
            x,
            v,
        });
    }

    Ok(steps)
}
