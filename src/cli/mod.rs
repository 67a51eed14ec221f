//! Command-line parsing for the rolling-track simulator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! modeling/math code.

use std::path::PathBuf;

use clap::Parser;

/// Fit a track polynomial to Tracker data and simulate a rolling ball.
#[derive(Debug, Parser)]
#[command(name = "rolltrack", version, about = "Rolling-track fit & motion simulation")]
pub struct Cli {
    /// Tracker export file (t x y triples after 2 header lines).
    pub data: PathBuf,

    /// Simulation horizon in seconds.
    #[arg(long, default_value_t = 0.9)]
    pub end_time: f64,

    /// Integration step in seconds.
    #[arg(long, default_value_t = 0.001)]
    pub step_size: f64,

    /// Export the simulated series (step, t, grid_x, x, v) to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fitted curve (coefficients + sampled grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}
