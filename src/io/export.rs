//! Export the simulated series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SimStep;
use crate::error::{AppError, ErrorKind};

/// Write one row per integration step to a CSV file.
pub fn write_results_csv(path: &Path, steps: &[SimStep]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "step,t,grid_x,x,v")
        .map_err(|e| AppError::new(ErrorKind::Io, format!("failed to write export CSV header: {e}")))?;

    for s in steps {
        writeln!(
            file,
            "{},{:.6},{:.10},{:.10},{:.10}",
            s.step, s.t, s.grid_x, s.x, s.v
        )
        .map_err(|e| AppError::new(ErrorKind::Io, format!("failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
