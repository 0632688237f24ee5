//! Error types for dedupe.
//!
//! Deduplication itself cannot fail. Everything around it (reading input,
//! parsing records, loading configuration) reports failures through [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dedupe operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Input Errors ===
    /// A line of delimited input could not be parsed into a record.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending input.
        line: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// The input held more records than the configured limit.
    #[error("input exceeds the limit of {limit} records")]
    TooManyRecords {
        /// The configured `max_records` value.
        limit: usize,
    },

    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    InputRead {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// Reading standard input or another stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dedupe operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a parse error for the given 1-based line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from malformed input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::TooManyRecords { .. } | Self::Json(_)
        )
    }

    /// Check if this error came from loading or validating configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }

    /// Process exit status for this error, following `sysexits.h`:
    /// 65 (`EX_DATAERR`) for bad input, 78 (`EX_CONFIG`) for bad
    /// configuration, 74 (`EX_IOERR`) for I/O failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_input_error() {
            65
        } else if self.is_config_error() {
            78
        } else {
            74
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(3, "missing delimiter");
        assert_eq!(err.to_string(), "line 3: missing delimiter");
    }

    #[test]
    fn test_too_many_records_display() {
        let err = Error::TooManyRecords { limit: 10 };
        assert_eq!(err.to_string(), "input exceeds the limit of 10 records");
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::config_validation("bad delimiter");
        assert_eq!(err.to_string(), "invalid configuration: bad delimiter");
    }

    #[test]
    fn test_input_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::InputRead {
            path: PathBuf::from("/tmp/users.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/users.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::parse(1, "x").is_input_error());
        assert!(Error::TooManyRecords { limit: 1 }.is_input_error());
        assert!(!Error::config_validation("x").is_input_error());
    }

    #[test]
    fn test_is_config_error() {
        assert!(Error::config_validation("x").is_config_error());
        assert!(!Error::parse(1, "x").is_config_error());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::parse(2, "empty key").exit_code(), 65);
        assert_eq!(Error::TooManyRecords { limit: 3 }.exit_code(), 65);
        assert_eq!(Error::config_validation("bad delimiter").exit_code(), 78);

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::InputRead {
            path: PathBuf::from("missing.txt"),
            source: io_err,
        };
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
            assert!(err.is_input_error());
        }
    }
}
