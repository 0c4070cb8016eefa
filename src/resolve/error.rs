//! Error types for resolving flag values in command handlers.

use thiserror::Error;

use crate::config::ConfigError;

/// Error type for value resolution.
///
/// Unlike composition faults, these come from user input and are reported
/// back to the user by the calling command.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The timeout string is not a valid duration expression.
    #[error("Invalid duration '{value}': {reason}")]
    InvalidDuration {
        /// The rejected string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Both `--file` and `--url` were given.
    #[error("Conflicting input sources: use either --file '{file}' or --url '{url}', not both")]
    ConflictingInputSource {
        /// Value of `--file`
        file: String,
        /// Value of `--url`
        url: String,
    },

    /// Reading the flag values from the store failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
