//! rly: IBC relayer command line
//!
//! Entry point for the `rly` binary. Parses the command line, layers the
//! environment and config file over the flag defaults, and prints the
//! resolved settings of the invoked subcommand as JSON.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Command;
use relayer_flags::config::{ConfigStore, Value};
use relayer_flags::flags::names;
use relayer_flags::resolve::{self, InputSource, ResolveError};
use serde::Serialize;

mod app;
mod commands;

use app::{exit_code, load_overlays, print_config_hint, setup_tracing};

/// Resolved settings of one invocation.
#[derive(Debug, Serialize)]
struct Report {
    command: String,
    values: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<InputSource>,
}

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let mut store = ConfigStore::new();
    let mut cmd = commands::build(&mut store);

    let matches = match cmd.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };

    let path = commands::command_path(&matches);
    let leaf = leaf_matches(&matches);
    setup_tracing(leaf.get_flag(commands::global::VERBOSE));

    let env_prefix = leaf
        .get_one::<String>(commands::global::ENV_PREFIX)
        .map_or(commands::ENV_PREFIX, String::as_str);
    let config = leaf.get_one::<PathBuf>(commands::global::CONFIG);

    if let Err(e) = load_overlays(&mut store, env_prefix, config.map(PathBuf::as_path)) {
        eprintln!("Configuration error: {e}");
        print_config_hint(&e);
        return exit_code::CONFIG_ERROR;
    }
    store.load_matches(&matches);
    tracing::debug!("Invoked 'rly {}'", path.join(" "));

    let Some(invoked) = commands::find(&cmd, &path) else {
        tracing::error!("Matched subcommand is missing from the command tree");
        return exit_code::CONFIG_ERROR;
    };

    match report(&store, invoked, &path) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                exit_code::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                exit_code::CONFIG_ERROR
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            if let ResolveError::Config(config_error) = &e {
                print_config_hint(config_error);
            }
            exit_code::CONFIG_ERROR
        }
    }
}

/// Matches of the deepest invoked subcommand.
fn leaf_matches(matches: &clap::ArgMatches) -> &clap::ArgMatches {
    let mut level = matches;
    while let Some((_, sub)) = level.subcommand() {
        level = sub;
    }
    level
}

/// Collects the bound values of `invoked` and runs the resolution helpers
/// its flags call for.
fn report(store: &ConfigStore, invoked: &Command, path: &[String]) -> Result<Report, ResolveError> {
    let has_flag = |flag: &str| invoked.get_arguments().any(|arg| arg.get_id() == flag);

    let mut values = BTreeMap::new();
    for key in store.keys() {
        if store.binding(key).is_some_and(|binding| has_flag(binding.flag)) {
            values.insert(key.to_string(), store.get(key)?);
        }
    }

    let timeout = if has_flag(names::TIMEOUT) {
        let timeout = resolve::timeout_from(store)?;
        tracing::info!("Using timeout of {}", humantime::format_duration(timeout));
        Some(humantime::format_duration(timeout).to_string())
    } else {
        None
    };

    let input = if has_flag(names::FILE) && has_flag(names::URL) {
        resolve::input_source_from(store)?
    } else {
        None
    };

    Ok(Report {
        command: path.join(" "),
        values,
        timeout,
        input,
    })
}
