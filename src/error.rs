/// Which stage of the pipeline failed.
///
/// Each kind maps to a stable process exit code so scripts can distinguish
/// "file missing" from "fit failed" without parsing stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file missing or unreadable (exit code 2).
    Io,
    /// Malformed data row (exit code 3).
    Parse,
    /// Insufficient or degenerate data for the polynomial fit (exit code 4).
    Fit,
    /// Undefined arithmetic during integration, e.g. sqrt of a negative
    /// arc-length term (exit code 5).
    NumericDomain,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Io => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Fit => 4,
            ErrorKind::NumericDomain => 5,
        }
    }

    fn stage(self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::Fit => "fit",
            ErrorKind::NumericDomain => "numeric",
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.stage(), self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let codes = [
            ErrorKind::Io.exit_code(),
            ErrorKind::Parse.exit_code(),
            ErrorKind::Fit.exit_code(),
            ErrorKind::NumericDomain.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_names_the_failing_stage() {
        let err = AppError::new(ErrorKind::Fit, "not enough samples");
        assert_eq!(format!("{err}"), "fit: not enough samples");
    }
}
