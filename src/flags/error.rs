//! Error types for flag composition.

use thiserror::Error;

use super::catalog::FlagGroup;
use crate::config::Binding;

/// Error type for composing flag groups onto a subcommand.
///
/// These describe programming errors in the command tree, not user input.
/// The fluent [`FlagComposer`](super::FlagComposer) methods turn them into
/// a startup panic; [`FlagComposer::try_apply`](super::FlagComposer::try_apply)
/// returns them for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// A flag with the same long name is already registered.
    #[error("Group '{group}' on '{command}': flag --{flag} is already registered")]
    DuplicateFlag {
        /// Subcommand being composed
        command: String,
        /// Group being applied
        group: FlagGroup,
        /// The duplicated long name
        flag: &'static str,
    },

    /// A flag with the same shorthand is already registered.
    #[error(
        "Group '{group}' on '{command}': shorthand -{short} of --{flag} is already used by --{existing}"
    )]
    DuplicateShorthand {
        /// Subcommand being composed
        command: String,
        /// Group being applied
        group: FlagGroup,
        /// The duplicated shorthand
        short: char,
        /// Flag claiming the shorthand
        flag: &'static str,
        /// Flag already holding the shorthand
        existing: String,
    },

    /// The configuration key is already bound to a different flag definition.
    #[error("Group '{group}': config key '{key}' is bound to {existing}, cannot rebind to {requested}")]
    BindingConflict {
        /// Group being applied
        group: FlagGroup,
        /// The contested key
        key: &'static str,
        /// The existing binding
        existing: Binding,
        /// The rejected binding
        requested: Binding,
    },

    /// A catalog default does not parse as its flag's kind.
    #[error("Group '{group}': default '{default}' of --{flag} is invalid: {reason}")]
    InvalidDefault {
        /// Group being applied
        group: FlagGroup,
        /// The flag
        flag: &'static str,
        /// The default literal
        default: &'static str,
        /// Parse failure reason
        reason: String,
    },
}
