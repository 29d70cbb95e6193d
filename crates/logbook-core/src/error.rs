//! Error types for the logbook engine.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading, mutating, or rendering the logbook.
///
/// Every variant is recoverable at the call site; the engine never aborts
/// the host process.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Reading or writing a persisted file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A ledger line does not follow the fixed entry layout.
    #[error("Malformed entry on line {line_number}: {reason} ({line:?})")]
    MalformedEntry {
        /// 1-based line number within the ledger text (0 when decoded standalone)
        line_number: usize,
        /// Offending line, without its terminator
        line: String,
        /// What did not match
        reason: String,
    },

    /// Input rejected before touching the ledger.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for logbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error tagged with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a malformed-entry error for a standalone line.
    pub fn malformed<L, R>(line: L, reason: R) -> Self
    where
        L: Into<String>,
        R: Into<String>,
    {
        Error::MalformedEntry {
            line_number: 0,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Attaches a 1-based line number to a malformed-entry error.
    ///
    /// Other variants are returned untouched.
    pub fn at_line(self, number: usize) -> Self {
        match self {
            Error::MalformedEntry { line, reason, .. } => Error::MalformedEntry {
                line_number: number,
                line,
                reason,
            },
            other => other,
        }
    }

    /// Creates a validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the persisted ledger content.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedEntry { .. })
    }
}
