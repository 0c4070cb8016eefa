//! Typed flag values held by the configuration store.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

/// The kind of a flag, fixing how its raw text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// `true` / `false`
    Bool,
    /// Signed 64-bit integer
    Int,
    /// Unsigned 64-bit integer
    Uint,
    /// Free-form UTF-8 string
    Str,
    /// Human-readable duration such as `10s` or `6h`
    Duration,
}

impl FlagKind {
    /// Parses raw text into a [`Value`] of this kind.
    ///
    /// Surrounding whitespace is ignored except for strings, which are kept
    /// verbatim as on the command line.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the text is not valid for this kind.
    pub fn parse(self, raw: &str) -> Result<Value, String> {
        let trimmed = raw.trim();
        match self {
            Self::Bool => trimmed
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|e| e.to_string()),
            Self::Int => trimmed.parse::<i64>().map(Value::Int).map_err(|e| e.to_string()),
            Self::Uint => trimmed.parse::<u64>().map(Value::Uint).map_err(|e| e.to_string()),
            Self::Str => Ok(Value::Str(raw.to_string())),
            Self::Duration => humantime::parse_duration(trimmed)
                .map(Value::Duration)
                .map_err(|e| e.to_string()),
        }
    }

    /// Name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int64",
            Self::Uint => "uint64",
            Self::Str => "string",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean flag value
    Bool(bool),
    /// Signed integer flag value
    Int(i64),
    /// Unsigned integer flag value
    Uint(u64),
    /// String flag value
    Str(String),
    /// Duration flag value
    Duration(Duration),
}

impl Value {
    /// Returns the kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Bool(_) => FlagKind::Bool,
            Self::Int(_) => FlagKind::Int,
            Self::Uint(_) => FlagKind::Uint,
            Self::Str(_) => FlagKind::Str,
            Self::Duration(_) => FlagKind::Duration,
        }
    }

    /// Converts a TOML value into a value of the given kind.
    ///
    /// Integers and booleans are accepted natively; strings are parsed
    /// with [`FlagKind::parse`] so that `"6h"` or `"true"` also work.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the TOML value does not fit the kind.
    pub fn from_toml(kind: FlagKind, raw: &toml::Value) -> Result<Self, String> {
        match (kind, raw) {
            (FlagKind::Bool, toml::Value::Boolean(b)) => Ok(Self::Bool(*b)),
            (FlagKind::Int, toml::Value::Integer(i)) => Ok(Self::Int(*i)),
            (FlagKind::Uint, toml::Value::Integer(i)) => u64::try_from(*i)
                .map(Self::Uint)
                .map_err(|_| format!("{i} is negative")),
            (FlagKind::Str, toml::Value::Integer(i)) => Ok(Self::Str(i.to_string())),
            (_, toml::Value::String(s)) => kind.parse(s),
            (_, other) => Err(format!("expected {kind}, found TOML {}", other.type_str())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Str(s) => f.write_str(s),
            Self::Duration(d) => write!(f, "{}", humantime::format_duration(*d)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Uint(u) => serializer.serialize_u64(*u),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Duration(d) => serializer.collect_str(&humantime::format_duration(*d)),
        }
    }
}
