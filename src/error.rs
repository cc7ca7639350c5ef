//! Error taxonomy for a report run.
//!
//! Every failure a run can hit maps onto one [`ReportError`] variant, and each
//! variant carries the process exit code the binary terminates with.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Bad or missing command-line argument.
    #[error("usage error: {0}")]
    Usage(String),

    /// Input file does not exist.
    #[error("the file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Input is not well-formed or a record is incomplete/invalid.
    #[error("parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The input contained no points, so no centroid exists.
    #[error("cannot compute a centroid of zero points")]
    EmptyInput,

    /// Output path or directory could not be created or written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Run configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::Usage(_) | ReportError::NotFound { .. } => 1,
            ReportError::Parse { .. } => 3,
            ReportError::EmptyInput => 4,
            ReportError::Io { .. } => 5,
            ReportError::Config(_) => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_past_usage() {
        let codes = [
            ReportError::parse("in.json", "bad").exit_code(),
            ReportError::EmptyInput.exit_code(),
            ReportError::io("out", std::io::Error::other("denied")).exit_code(),
            ReportError::Config("x".into()).exit_code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
        assert!(codes.iter().all(|c| *c != 0 && *c != 1));

        assert_eq!(ReportError::Usage("missing".into()).exit_code(), 1);
        assert_eq!(
            ReportError::NotFound {
                path: "nope.json".into()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn not_found_message_names_the_path() {
        let err = ReportError::NotFound {
            path: "data/points.json".into(),
        };
        assert_eq!(err.to_string(), "the file 'data/points.json' does not exist");
    }
}
