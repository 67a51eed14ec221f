//! Plain-text output formatting.
//!
//! We keep formatting code in one place so:
//! - the math/simulation code stays clean and testable
//! - the fixed output contract (coefficients, blank line, velocities) is
//!   localized and easy to snapshot-test

use crate::domain::SimStep;
use crate::track::TrackPoly;

/// Coefficients one per line, descending powers.
pub fn format_coefficients(track: &TrackPoly) -> String {
    let mut out = String::new();
    for c in track.coefficients() {
        out.push_str(&format!("{c}\n"));
    }
    out
}

/// Velocity values one per line, in step order.
pub fn format_velocities(steps: &[SimStep]) -> String {
    let mut out = String::new();
    for s in steps {
        out.push_str(&format!("{}\n", s.v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_print_one_per_line_in_order() {
        let track = TrackPoly::new(vec![3.0, -2.0, 0.5]);
        assert_eq!(format_coefficients(&track), "3\n-2\n0.5\n");
    }

    #[test]
    fn velocities_print_in_step_order() {
        let steps = [
            SimStep { step: 0, t: 0.001, grid_x: 0.0, x: 0.0, v: 0.0 },
            SimStep { step: 1, t: 0.002, grid_x: 0.001, x: 0.001, v: 0.25 },
        ];
        assert_eq!(format_velocities(&steps), "0\n0.25\n");
    }
}
