//! Error types for configuration store lookups and overlays.

use std::path::PathBuf;

use thiserror::Error;

use super::value::FlagKind;

/// Error type for configuration store operations.
///
/// Covers errors from reading overlay files and from resolving bound keys.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The key has no binding in the store.
    #[error("Unknown configuration key '{key}'")]
    UnknownKey {
        /// The requested key
        key: String,
    },

    /// A value kind does not match the kind the key is bound with.
    #[error("Configuration key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        /// The requested key
        key: String,
        /// Kind that was required
        expected: FlagKind,
        /// Kind that was supplied or resolved
        found: FlagKind,
    },

    /// A value from an overlay layer could not be converted to the bound kind.
    #[error("Invalid {layer} value for '{key}' ({value}): {reason}")]
    InvalidValue {
        /// The configuration key
        key: String,
        /// Layer the value came from
        layer: Layer,
        /// The offending raw value
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Overlay layer a raw value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Environment variables
    Env,
    /// TOML configuration file
    File,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => f.write_str("environment"),
            Self::File => f.write_str("config file"),
        }
    }
}

impl ConfigError {
    /// Creates an `UnknownKey` error.
    #[must_use]
    pub fn unknown(key: &str) -> Self {
        Self::UnknownKey {
            key: key.to_string(),
        }
    }
}
