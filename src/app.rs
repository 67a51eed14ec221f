//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the Tracker export
//! - fits the track polynomial
//! - runs the motion simulation
//! - prints the coefficient/velocity report
//! - writes optional exports

use clap::Parser;

use crate::domain::SimConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rolltrack` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    let config = SimConfig {
        end_time: cli.end_time,
        step_size: cli.step_size,
        ..SimConfig::default()
    };

    let run = pipeline::run_pipeline(&cli.data, &config)?;

    // Fixed output contract: coefficients, a blank line, then velocities.
    print!("{}", crate::report::format_coefficients(&run.track));
    println!();
    print!("{}", crate::report::format_velocities(&run.steps));

    // Optional exports.
    if let Some(path) = &cli.export {
        crate::io::export::write_results_csv(path, &run.steps)?;
    }
    if let Some(path) = &cli.export_curve {
        crate::io::curve::write_curve_json(path, &run.track, &run.samples, &cli.data)?;
    }

    Ok(())
}
