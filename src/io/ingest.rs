//! Tracker-export ingest and validation.
//!
//! The input is the standard Tracker export format: a name line and a column
//! header (`t x y`), then whitespace/tab-delimited decimal triples, one per
//! line.
//!
//! Design goals:
//! - **Strict rows**: a malformed row aborts the run with its line number;
//!   there is no partial-result mode for this tool
//! - **Deterministic behavior**: rows are used in file order
//! - **Separation of concerns**: no fitting logic here

use std::fs;
use std::path::Path;

use crate::domain::TrackSample;
use crate::error::{AppError, ErrorKind};

/// Number of leading metadata/header lines in a Tracker export.
const HEADER_LINES: usize = 2;

/// Load track samples from a Tracker export file.
pub fn load_track_samples(path: &Path) -> Result<Vec<TrackSample>, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("failed to read track data '{}': {e}", path.display()),
        )
    })?;
    parse_track_samples(&text)
}

/// Parse the body of a Tracker export.
///
/// The first two lines are skipped as metadata. Blank lines after the header
/// are ignored; anything else must be exactly three decimal fields `t x y`.
pub fn parse_track_samples(text: &str) -> Result<Vec<TrackSample>, AppError> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(HEADER_LINES) {
        // 1-based for error messages.
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(AppError::new(
                ErrorKind::Parse,
                format!(
                    "line {line_no}: expected 3 columns (t x y), got {}",
                    fields.len()
                ),
            ));
        }

        let mut values = [0.0_f64; 3];
        for (slot, field) in values.iter_mut().zip(fields.iter()) {
            *slot = field.parse().map_err(|_| {
                AppError::new(
                    ErrorKind::Parse,
                    format!("line {line_no}: '{field}' is not a decimal number"),
                )
            })?;
        }

        samples.push(TrackSample {
            t: values[0],
            x: values[1],
            y: values[2],
        });
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "mass_A\n\
        t\tx\ty\n\
        0.0\t-1.0686\t42.8007\n\
        0.04\t-0.7147\t42.6272\n";

    #[test]
    fn parses_rows_after_two_header_lines() {
        let samples = parse_track_samples(GOOD).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].t, 0.0);
        assert!((samples[0].x + 1.0686).abs() < 1e-12);
        assert!((samples[1].y - 42.6272).abs() < 1e-12);
    }

    #[test]
    fn skips_blank_lines_in_body() {
        let text = "mass_A\nt\tx\ty\n0.0\t1.0\t2.0\n\n0.04\t1.1\t2.1\n";
        let samples = parse_track_samples(text).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn wrong_column_count_reports_line_number() {
        let text = "mass_A\nt\tx\ty\n0.0\t1.0\n";
        let err = parse_track_samples(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(format!("{err}").contains("line 3"));
    }

    #[test]
    fn non_numeric_field_reports_line_number() {
        let text = "mass_A\nt\tx\ty\n0.0\t1.0\t2.0\n0.04\toops\t2.1\n";
        let err = parse_track_samples(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(format!("{err}").contains("line 4"));
    }

    #[test]
    fn header_only_export_yields_no_samples() {
        let samples = parse_track_samples("mass_A\nt\tx\ty\n").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_track_samples(Path::new("/nonexistent/Mass_A.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
