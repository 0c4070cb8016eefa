//! Layered configuration store holding flag bindings.
//!
//! The store is an explicit handle: every composer receives it at
//! construction time and every consumer reads from it after parsing.
//! Nothing is kept in process-wide state.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use super::error::{ConfigError, Layer};
use super::toml::TomlLayer;
use super::value::{FlagKind, Value};

/// Association between a configuration key and the flag that feeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Long name (and clap id) of the bound flag
    pub flag: &'static str,
    /// Kind of the bound flag
    pub kind: FlagKind,
    /// Typed default used when no layer provides a value
    pub default: Value,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{} ({}, default {})", self.flag, self.kind, self.default)
    }
}

/// A flag value captured from parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Captured {
    value: Value,
    /// Whether the user typed the flag (as opposed to clap filling in the default)
    explicit: bool,
}

/// Hierarchical key-value store that resolves bound flag values.
///
/// # Precedence
///
/// Values are resolved with the following priority (highest to lowest):
///
/// 1. **Overrides** set with [`ConfigStore::set`]
/// 2. **Explicit flags** given on the command line
/// 3. **Environment** variables named `<PREFIX>_<KEY>`
/// 4. **Config file** values (dotted keys descend into tables)
/// 5. **Flag defaults**
#[derive(Debug, Default)]
pub struct ConfigStore {
    bindings: BTreeMap<String, Binding>,
    captured: BTreeMap<String, Captured>,
    overrides: BTreeMap<String, Value>,
    env_prefix: Option<String>,
    env: BTreeMap<String, String>,
    file: TomlLayer,
}

impl ConfigStore {
    /// Creates an empty store with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing binding for `key` if it disagrees with `binding`.
    ///
    /// Rebinding a key with an identical definition is allowed; this is how
    /// several subcommands share keys such as `height` or `limit`.
    #[must_use]
    pub fn conflicting_binding(&self, key: &str, binding: &Binding) -> Option<&Binding> {
        self.bindings
            .get(key)
            .filter(|existing| *existing != binding)
    }

    /// Records a binding; callers must check [`Self::conflicting_binding`] first.
    pub(crate) fn bind(&mut self, key: &'static str, binding: Binding) {
        tracing::debug!("Bound config key '{key}' to flag --{}", binding.flag);
        self.bindings.insert(key.to_string(), binding);
    }

    /// Returns the binding for `key`, if any.
    #[must_use]
    pub fn binding(&self, key: &str) -> Option<&Binding> {
        self.bindings.get(key)
    }

    /// Iterates over all bound keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Captures bound flag values from parsed arguments.
    ///
    /// Walks the matched command path from the root down to the invoked
    /// subcommand. Values captured by a previous call are discarded.
    pub fn load_matches(&mut self, matches: &ArgMatches) {
        self.captured.clear();

        let mut level = Some(matches);
        while let Some(current) = level {
            for (key, binding) in &self.bindings {
                let Some(captured) = capture(current, binding) else {
                    continue;
                };

                let keeps_explicit = self
                    .captured
                    .get(key)
                    .is_some_and(|existing| existing.explicit && !captured.explicit);
                if keeps_explicit {
                    continue;
                }

                tracing::trace!(
                    "Captured --{} = {} (explicit: {})",
                    binding.flag,
                    captured.value,
                    captured.explicit
                );
                self.captured.insert(key.clone(), captured);
            }
            level = current.subcommand().map(|(_, sub)| sub);
        }
    }

    /// Snapshots environment variables starting with `<prefix>_`.
    pub fn load_env(&mut self, prefix: &str) {
        self.load_env_from(prefix, std::env::vars());
    }

    /// Snapshots the given variables, keeping those starting with `<prefix>_`.
    pub fn load_env_from<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = prefix.to_uppercase();
        let marker = format!("{prefix}_");
        self.env = vars
            .into_iter()
            .filter(|(name, _)| name.starts_with(&marker))
            .collect();
        self.env_prefix = Some(prefix);
    }

    /// Merges a TOML document into the file layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        self.file.merge(TomlLayer::parse(content)?);
        Ok(())
    }

    /// Reads a TOML file and merges it into the file layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.file.merge(TomlLayer::load(path)?);
        tracing::debug!("Merged config file {}", path.display());
        Ok(())
    }

    /// Overrides the value of a bound key, taking precedence over all layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unbound or the value has the wrong kind.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let binding = self.binding(key).ok_or_else(|| ConfigError::unknown(key))?;
        if binding.kind != value.kind() {
            return Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: binding.kind,
                found: value.kind(),
            });
        }

        self.overrides.insert(key.to_string(), value);
        Ok(())
    }

    /// Resolves the value of a bound key across all layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unbound, or if an environment or file
    /// value cannot be converted to the bound kind.
    pub fn get(&self, key: &str) -> Result<Value, ConfigError> {
        let binding = self.binding(key).ok_or_else(|| ConfigError::unknown(key))?;

        if let Some(value) = self.overrides.get(key) {
            return Ok(value.clone());
        }

        let captured = self.captured.get(key);
        if let Some(flag) = captured.filter(|c| c.explicit) {
            return Ok(flag.value.clone());
        }

        if let Some(raw) = self.env_value(key) {
            return binding
                .kind
                .parse(raw)
                .map_err(|reason| invalid(key, Layer::Env, raw.to_string(), reason));
        }

        if let Some(raw) = self.file.get(key) {
            return Value::from_toml(binding.kind, raw)
                .map_err(|reason| invalid(key, Layer::File, raw.to_string(), reason));
        }

        Ok(captured.map_or_else(|| binding.default.clone(), |c| c.value.clone()))
    }

    /// Resolves a boolean key.
    ///
    /// # Errors
    ///
    /// See [`Self::get`]; also fails if the key is not a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key)? {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(key, FlagKind::Bool, &other)),
        }
    }

    /// Resolves a signed integer key.
    ///
    /// # Errors
    ///
    /// See [`Self::get`]; also fails if the key is not a signed integer.
    pub fn get_i64(&self, key: &str) -> Result<i64, ConfigError> {
        match self.get(key)? {
            Value::Int(i) => Ok(i),
            other => Err(mismatch(key, FlagKind::Int, &other)),
        }
    }

    /// Resolves an unsigned integer key.
    ///
    /// # Errors
    ///
    /// See [`Self::get`]; also fails if the key is not an unsigned integer.
    pub fn get_u64(&self, key: &str) -> Result<u64, ConfigError> {
        match self.get(key)? {
            Value::Uint(u) => Ok(u),
            other => Err(mismatch(key, FlagKind::Uint, &other)),
        }
    }

    /// Resolves a string key.
    ///
    /// # Errors
    ///
    /// See [`Self::get`]; also fails if the key is not a string.
    pub fn get_str(&self, key: &str) -> Result<String, ConfigError> {
        match self.get(key)? {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(key, FlagKind::Str, &other)),
        }
    }

    /// Resolves a duration key.
    ///
    /// # Errors
    ///
    /// See [`Self::get`]; also fails if the key is not a duration.
    pub fn get_duration(&self, key: &str) -> Result<Duration, ConfigError> {
        match self.get(key)? {
            Value::Duration(d) => Ok(d),
            other => Err(mismatch(key, FlagKind::Duration, &other)),
        }
    }

    /// Resolves every bound key.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error encountered.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Value>, ConfigError> {
        self.keys()
            .map(|key| Ok((key.to_string(), self.get(key)?)))
            .collect()
    }

    fn env_value(&self, key: &str) -> Option<&str> {
        let prefix = self.env_prefix.as_deref()?;
        self.env.get(&env_var_name(prefix, key)).map(String::as_str)
    }
}

/// Environment variable name for a key: `RLY` + `max-retries` -> `RLY_MAX_RETRIES`.
#[must_use]
pub fn env_var_name(prefix: &str, key: &str) -> String {
    format!(
        "{}_{}",
        prefix.to_uppercase(),
        key.to_uppercase().replace(['-', '.'], "_")
    )
}

fn capture(matches: &ArgMatches, binding: &Binding) -> Option<Captured> {
    let id = binding.flag;
    // Querying an id the command does not define panics in debug builds
    if !matches.ids().any(|known| known.as_str() == id) {
        return None;
    }

    let value = match binding.kind {
        FlagKind::Bool => matches.try_get_one::<bool>(id).ok()?.map(|b| Value::Bool(*b)),
        FlagKind::Int => matches.try_get_one::<i64>(id).ok()?.map(|i| Value::Int(*i)),
        FlagKind::Uint => matches.try_get_one::<u64>(id).ok()?.map(|u| Value::Uint(*u)),
        FlagKind::Str => matches
            .try_get_one::<String>(id)
            .ok()?
            .map(|s| Value::Str(s.clone())),
        FlagKind::Duration => matches
            .try_get_one::<Duration>(id)
            .ok()?
            .map(|d| Value::Duration(*d)),
    }?;

    let explicit = matches!(
        matches.value_source(id),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    );

    Some(Captured { value, explicit })
}

fn invalid(key: &str, layer: Layer, value: String, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        layer,
        value,
        reason,
    }
}

fn mismatch(key: &str, expected: FlagKind, found: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}
