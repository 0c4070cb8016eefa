//! Flag groups and their composition onto subcommands.
//!
//! This module provides:
//! - The flag catalog ([`FlagGroup`], [`FlagDef`], [`names`], [`shared`])
//! - The fluent composer ([`FlagComposer`])
//! - Composition faults ([`CompositionError`])
//!
//! # Shorthand collisions
//!
//! Several groups claim the same shorthand: `-o` (`pagination`, `timeout`,
//! `channel-order`), `-y` (`yaml-output`, `skip-confirm`, `timeouts`),
//! `-l` (`pagination`, `strategy`) and `-p` (`path`, `port`). Such groups
//! cannot be composed onto the same subcommand; the composer rejects the
//! second one with [`CompositionError::DuplicateShorthand`].

mod arg;
mod catalog;
mod composer;
mod error;

#[cfg(test)]
mod catalog_tests;

pub use arg::to_arg;
pub use catalog::{FlagDef, FlagGroup, names, shared};
pub use composer::FlagComposer;
pub use error::CompositionError;
