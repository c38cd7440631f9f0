//! Error types and exit codes for sift
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (missing or malformed notes file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the sift CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - missing or malformed notes file (3)
    Input = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during sift operations
#[derive(Error, Debug)]
pub enum SiftError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    // Input errors (exit code 3)
    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("invalid notes input: {reason}")]
    InvalidInput { reason: String },

    #[error("config error in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SiftError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SiftError::UnknownFormat(_)
            | SiftError::DuplicateFormat
            | SiftError::UsageError(_)
            | SiftError::InvalidThreshold(_) => ExitCode::Usage,

            SiftError::InputNotFound { .. }
            | SiftError::InvalidInput { .. }
            | SiftError::InvalidConfig { .. } => ExitCode::Input,

            SiftError::Io(_) | SiftError::Json(_) | SiftError::Toml(_) | SiftError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SiftError::UnknownFormat(_) => "unknown_format",
            SiftError::DuplicateFormat => "duplicate_format",
            SiftError::UsageError(_) => "usage_error",
            SiftError::InvalidThreshold(_) => "invalid_threshold",
            SiftError::InputNotFound { .. } => "input_not_found",
            SiftError::InvalidInput { .. } => "invalid_input",
            SiftError::InvalidConfig { .. } => "invalid_config",
            SiftError::Io(_) => "io_error",
            SiftError::Json(_) => "json_error",
            SiftError::Toml(_) => "toml_error",
            SiftError::Other(_) => "other",
        }
    }
}

/// Result type alias for sift operations
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SiftError::UnknownFormat("x".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(SiftError::InvalidThreshold(1.5).exit_code(), ExitCode::Usage);
        assert_eq!(
            SiftError::InputNotFound {
                path: PathBuf::from("notes.json")
            }
            .exit_code(),
            ExitCode::Input
        );
        assert_eq!(SiftError::Other("boom".into()).exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_json_envelope() {
        let err = SiftError::InvalidInput {
            reason: "expected an array".into(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_input");
    }
}
