//! Error types for chassis
//!
//! Uses `thiserror` for library errors.
//!
//! Note that log-write failures never appear here: logging is best-effort and
//! reports its own I/O problems to stderr instead of the caller (see
//! [`crate::logger::Logger::log`]).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chassis operations
pub type ChassisResult<T> = Result<T, ChassisError>;

/// Main error type for chassis operations
#[derive(Error, Debug)]
pub enum ChassisError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Lookup of a settings key that was never set
    #[error("unknown setting '{key}'")]
    UnknownSetting { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_config() {
        let err = ChassisError::InvalidConfig {
            file: PathBuf::from("logger-config.json"),
            message: "expected value at line 3 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in logger-config.json: expected value at line 3 column 1"
        );
    }

    #[test]
    fn test_error_display_unknown_setting() {
        let err = ChassisError::UnknownSetting {
            key: "language".to_string(),
        };
        assert_eq!(err.to_string(), "unknown setting 'language'");
    }
}
