//! Error types for logbook-cli

use thiserror::Error;

/// Result type alias for logbook-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in logbook-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the logbook engine
    #[error(transparent)]
    Core(#[from] logbook_core::Error),

    /// Terminal or file I/O outside the engine failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User is not on the configured roster
    #[error("Unknown user '{user}' (not on the roster; pass --any-user to skip this check)")]
    UnknownUser {
        /// Handle that was given
        user: String,
    },

    /// Configuration file management failed
    #[error("{0}")]
    Config(String),
}

impl Error {
    /// Creates a configuration management error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
