//! Configuration store for resolved flag values.
//!
//! This module provides:
//! - The layered store that flags are bound into ([`ConfigStore`], [`Binding`])
//! - Typed flag values ([`Value`], [`FlagKind`])
//! - The TOML file overlay ([`TomlLayer`])
//! - Default flag literals ([`defaults`])
//!
//! # Priority
//!
//! A bound key is resolved with the following priority (highest to lowest):
//!
//! 1. **Overrides** - Values set programmatically with [`ConfigStore::set`]
//! 2. **Explicit CLI arguments** - Flags the user actually typed
//! 3. **Environment** - `<PREFIX>_<KEY>` variables (`RLY_MAX_RETRIES`)
//! 4. **TOML config file** - Values from the configuration file
//! 5. **Flag defaults** - The defaults registered with the flag
//!
//! Keys shared by several subcommands (`height`, `offset`, `limit`) resolve
//! to a single value, whichever subcommand was invoked.

pub mod defaults;
mod error;
mod store;
mod toml;
mod value;

#[cfg(test)]
mod store_tests;

pub use error::{ConfigError, Layer};
pub use store::{Binding, ConfigStore, env_var_name};
pub use toml::TomlLayer;
pub use value::{FlagKind, Value};
