//! Resolution of the mutually exclusive `--file` / `--url` inputs.

use std::path::PathBuf;

use serde::Serialize;

use super::ResolveError;
use crate::config::ConfigStore;
use crate::flags::names;

/// Where a command should read its input data from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// Local file given with `--file`
    File(PathBuf),
    /// Remote location given with `--url`
    Url(String),
}

/// Selects the input source from the `file` and `url` flag values.
///
/// Returns `Ok(None)` when neither is set; whether that is an error is up
/// to the calling command.
///
/// # Errors
///
/// Returns [`ResolveError::ConflictingInputSource`] if both are non-empty.
pub fn resolve_input_source(file: &str, url: &str) -> Result<Option<InputSource>, ResolveError> {
    match (file.is_empty(), url.is_empty()) {
        (false, false) => Err(ResolveError::ConflictingInputSource {
            file: file.to_string(),
            url: url.to_string(),
        }),
        (false, true) => Ok(Some(InputSource::File(PathBuf::from(file)))),
        (true, false) => Ok(Some(InputSource::Url(url.to_string()))),
        (true, true) => Ok(None),
    }
}

/// Reads the `file` and `url` keys from the store and selects the input source.
///
/// # Errors
///
/// Returns an error if either key is not bound or both values are set.
pub fn input_source_from(store: &ConfigStore) -> Result<Option<InputSource>, ResolveError> {
    let file = store.get_str(names::FILE)?;
    let url = store.get_str(names::URL)?;
    resolve_input_source(&file, &url)
}
