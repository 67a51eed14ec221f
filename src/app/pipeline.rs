//! The shared "run pipeline" logic behind the CLI front-end.
//!
//! Keeping this in one place keeps the core workflow linear and testable:
//! ingest -> fit -> simulate
//!
//! The CLI layer then focuses on presentation (printing, exports).

use std::path::Path;

use crate::domain::{SimConfig, SimStep, TrackSample};
use crate::error::AppError;
use crate::track::TrackPoly;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: Vec<TrackSample>,
    pub track: TrackPoly,
    pub steps: Vec<SimStep>,
}

/// Execute the full pipeline against a data file.
pub fn run_pipeline(data: &Path, config: &SimConfig) -> Result<RunOutput, AppError> {
    let samples = crate::io::ingest::load_track_samples(data)?;
    run_pipeline_with_samples(samples, config)
}

/// Execute the pipeline with pre-loaded samples.
///
/// Useful in tests, where the data comes from a string rather than a file.
pub fn run_pipeline_with_samples(
    samples: Vec<TrackSample>,
    config: &SimConfig,
) -> Result<RunOutput, AppError> {
    let track = crate::fit::fit_track(&samples)?;
    let steps = crate::sim::simulate(&track, config)?;

    Ok(RunOutput {
        samples,
        track,
        steps,
    })
}
