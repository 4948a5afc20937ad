//! CLI error types

use intl_types::IntlError;
use thiserror::Error;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from a native engine or an option bag
    #[error("{0}")]
    Intl(#[from] IntlError),

    /// `--at` was not an RFC 3339 timestamp
    #[error("invalid timestamp '{input}': {source}")]
    InvalidDate {
        /// The rejected input
        input: String,
        /// Parser failure
        #[source]
        source: chrono::ParseError,
    },

    /// Writing the result failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
