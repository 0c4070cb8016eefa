//! TOML configuration overlay.
//!
//! The file is an untyped table; values are only converted once a key is
//! looked up and its bound kind is known.

use std::path::Path;

use super::ConfigError;

/// Raw TOML overlay merged into the configuration store.
#[derive(Debug, Default, Clone)]
pub struct TomlLayer {
    table: toml::Table,
}

impl TomlLayer {
    /// Loads an overlay from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses an overlay from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table = toml::from_str::<toml::Table>(content)?;
        Ok(Self { table })
    }

    /// Merges `other` on top of this layer; later tables win key by key.
    pub fn merge(&mut self, other: Self) {
        merge_tables(&mut self.table, other.table);
    }

    /// Looks up a key, descending into nested tables on `.` separators.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        if let Some(value) = self.table.get(key) {
            return Some(value);
        }

        let mut parts = key.split('.');
        let first = self.table.get(parts.next()?)?;
        parts.try_fold(first, |value, part| value.as_table()?.get(part))
    }

    /// Returns true if the layer holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let toml::Value::Table(incoming) = value else {
            base.insert(key, value);
            continue;
        };

        if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
            merge_tables(existing, incoming);
        } else {
            base.insert(key, toml::Value::Table(incoming));
        }
    }
}
