//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and configuration
//! loading that support the main entry point.

use std::path::{Path, PathBuf};

use relayer_flags::config::{ConfigError, ConfigStore};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration or resolution error (exit code 1) - bad config file,
    /// invalid timeout, conflicting inputs, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Default config file location: `~/.relayer/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".relayer").join("config.toml"))
}

/// Loads the environment and file overlays into the store.
///
/// An explicitly given config file must exist; the default one is
/// optional.
pub fn load_overlays(
    store: &mut ConfigStore,
    env_prefix: &str,
    explicit: Option<&Path>,
) -> Result<(), ConfigError> {
    store.load_env(env_prefix);

    if let Some(path) = explicit {
        return store.load_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => store.load_file(&path),
        _ => {
            tracing::debug!("No config file found, using flags and environment only");
            Ok(())
        }
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            eprintln!("\nPass --config <path> to use a different configuration file.");
        }
        ConfigError::InvalidValue { key, .. } => {
            eprintln!("\nCheck the value of '{key}' in your environment and config file.");
        }
        _ => {}
    }
}
