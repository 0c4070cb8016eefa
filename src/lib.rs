//! Relayer flags: composable command-line flag groups for the `rly` relayer.
//!
//! A library for declaring which flag groups a subcommand needs and
//! binding every registered flag into an explicit, layered configuration
//! store that command handlers read from.

pub mod config;
pub mod flags;
pub mod resolve;
