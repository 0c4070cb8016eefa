//! Conversion of catalog definitions into clap arguments.

use clap::{Arg, ArgAction, value_parser};

use super::catalog::FlagDef;
use crate::config::FlagKind;

/// Builds the clap argument for a flag definition.
///
/// Booleans take an optional `=value` so that flags defaulting to `true`
/// can still be turned off with `--name=false`.
#[must_use]
pub fn to_arg(def: &FlagDef) -> Arg {
    let mut arg = Arg::new(def.name).long(def.name).help(def.help);

    if let Some(short) = def.short {
        arg = arg.short(short);
    }

    // An empty default is left to the store's binding default
    if !def.default.is_empty() {
        arg = arg.default_value(def.default);
    }

    match def.kind {
        FlagKind::Bool => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(value_parser!(bool)),
        FlagKind::Int => arg.action(ArgAction::Set).value_parser(value_parser!(i64)),
        FlagKind::Uint => arg.action(ArgAction::Set).value_parser(value_parser!(u64)),
        FlagKind::Str => arg.action(ArgAction::Set).value_parser(value_parser!(String)),
        FlagKind::Duration => arg
            .action(ArgAction::Set)
            .value_parser(humantime::parse_duration),
    }
}
