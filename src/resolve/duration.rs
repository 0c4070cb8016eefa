//! Resolution of the `--timeout` string flag.

use std::time::Duration;

use super::ResolveError;
use crate::config::ConfigStore;
use crate::flags::names;

/// Parses the value of the `timeout` flag as a duration.
///
/// Accepts humantime expressions such as `10s`, `500ms` or `1h 30m`.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidDuration`] if the string is not a valid
/// duration expression.
pub fn resolve_timeout(value: &str) -> Result<Duration, ResolveError> {
    humantime::parse_duration(value.trim()).map_err(|e| ResolveError::InvalidDuration {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Reads the `timeout` key from the store and parses it.
///
/// # Errors
///
/// Returns an error if the key is not bound or the value is not a valid duration.
pub fn timeout_from(store: &ConfigStore) -> Result<Duration, ResolveError> {
    let raw = store.get_str(names::TIMEOUT)?;
    resolve_timeout(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn parses_seconds() {
        assert_eq!(resolve_timeout("10s").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn parses_compound_expressions() {
        assert_eq!(
            resolve_timeout("1h 30m").unwrap(),
            Duration::from_secs(5_400)
        );
        assert_eq!(
            resolve_timeout("250ms").unwrap(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn rejects_bogus() {
        let err = resolve_timeout("bogus").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidDuration { ref value, .. } if value == "bogus"
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            resolve_timeout(""),
            Err(ResolveError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn unbound_store_key_is_a_config_error() {
        let store = ConfigStore::new();
        assert!(matches!(
            timeout_from(&store),
            Err(ResolveError::Config(ConfigError::UnknownKey { .. }))
        ));
    }
}
