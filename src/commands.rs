//! The `rly` command tree.
//!
//! Each subcommand declares its flags through [`FlagComposer`]; the
//! handlers themselves live outside this crate.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use relayer_flags::config::ConfigStore;
use relayer_flags::flags::FlagComposer;

/// Global argument ids.
pub mod global {
    /// `--config <PATH>`
    pub const CONFIG: &str = "config";
    /// `--env-prefix <PREFIX>`
    pub const ENV_PREFIX: &str = "env-prefix";
    /// `--verbose`
    pub const VERBOSE: &str = "verbose";
}

/// Default prefix for environment overrides (`RLY_MAX_RETRIES`).
pub const ENV_PREFIX: &str = "RLY";

/// Builds the full command tree, binding every flag into `store`.
///
/// # Panics
///
/// Panics if two flag groups on one subcommand collide; the tree is
/// static, so this can only be a bug in this function.
pub fn build(store: &mut ConfigStore) -> Command {
    Command::new("rly")
        .about("Relay packets and manage paths between IBC-enabled chains")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        // Globals bypass the composer's collision checks, so they stay
        // long-only and off catalog names.
        .arg(
            Arg::new(global::CONFIG)
                .long(global::CONFIG)
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to configuration file [default: ~/.relayer/config.toml]"),
        )
        .arg(
            Arg::new(global::ENV_PREFIX)
                .long(global::ENV_PREFIX)
                .global(true)
                .value_name("PREFIX")
                .default_value(ENV_PREFIX)
                .help("Prefix of environment variables that override flag defaults"),
        )
        .arg(
            Arg::new(global::VERBOSE)
                .long(global::VERBOSE)
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable verbose logging"),
        )
        .subcommand(query(store))
        .subcommand(tx(store))
        .subcommand(paths(store))
        .subcommand(start(store))
}

fn positional(id: &'static str, value_name: &'static str) -> Arg {
    Arg::new(id).value_name(value_name).required(true)
}

fn query(store: &mut ConfigStore) -> Command {
    let balance = Command::new("balance")
        .about("Query the account balances")
        .arg(positional("chain_id", "CHAIN"));
    let header = Command::new("header")
        .about("Query the header of a chain at a given height")
        .arg(positional("chain_id", "CHAIN"));
    let clients = Command::new("clients")
        .about("Query the clients on a chain")
        .arg(positional("chain_id", "CHAIN"));
    let channels = Command::new("channels")
        .about("Query the channels on a chain")
        .arg(positional("chain_id", "CHAIN"));

    Command::new("query")
        .visible_alias("q")
        .about("IBC query commands")
        .subcommand_required(true)
        .subcommand(
            FlagComposer::attach(store, balance)
                .ibc_denom()
                .json_output()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, header)
                .height()
                .json_output()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, clients)
                .pagination()
                .json_output()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, channels)
                .pagination()
                .yaml_output()
                .finalize(),
        )
}

fn tx(store: &mut ConfigStore) -> Command {
    let link = Command::new("link")
        .about("Create clients, a connection and a channel on a path")
        .arg(positional("path_name", "PATH"));
    let clients = Command::new("clients")
        .about("Create a client on each chain of a path")
        .arg(positional("path_name", "PATH"));
    let channel = Command::new("channel")
        .about("Create a channel on a path")
        .arg(positional("path_name", "PATH"));
    let transfer = Command::new("transfer")
        .about("Send tokens to an address on another chain")
        .arg(positional("src_chain_id", "SRC"))
        .arg(positional("dst_chain_id", "DST"))
        .arg(positional("amount", "AMOUNT"))
        .arg(positional("receiver", "RECEIVER"));
    let relay = Command::new("relay-packets")
        .about("Relay outstanding packets on a path")
        .arg(positional("path_name", "PATH"));

    Command::new("tx")
        .about("IBC transaction commands")
        .subcommand_required(true)
        .subcommand(
            FlagComposer::attach(store, link)
                .client_parameters()
                .override_client()
                .update_time()
                .timeout()
                .retry()
                .channel_version()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, clients)
                .client_parameters()
                .override_client()
                .update_time()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, channel)
                .channel_order()
                .channel_version()
                .override_client()
                .retry()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, transfer)
                .path()
                .timeouts()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, relay)
                .strategy()
                .retry()
                .finalize(),
        )
}

fn paths(store: &mut ConfigStore) -> Command {
    let add = Command::new("add")
        .about("Add a path from a file or URL")
        .arg(positional("src_chain_id", "SRC"))
        .arg(positional("dst_chain_id", "DST"))
        .arg(positional("path_name", "NAME"));
    let generate = Command::new("generate")
        .about("Generate a path between two chains")
        .arg(positional("src_chain_id", "SRC"))
        .arg(positional("dst_chain_id", "DST"))
        .arg(positional("path_name", "NAME"));
    let list = Command::new("list").about("List the configured paths");

    Command::new("paths")
        .visible_alias("pth")
        .about("Manage path configurations")
        .subcommand_required(true)
        .subcommand(
            FlagComposer::attach(store, add)
                .file_input()
                .url_input()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, generate)
                .port()
                .channel_version()
                .channel_order()
                .finalize(),
        )
        .subcommand(
            FlagComposer::attach(store, list)
                .yaml_output()
                .json_output()
                .finalize(),
        )
}

fn start(store: &mut ConfigStore) -> Command {
    let start = Command::new("start")
        .about("Start relaying packets on a path")
        .arg(positional("path_name", "PATH"));

    FlagComposer::attach(store, start)
        .strategy()
        .timeout()
        .update_time()
        .finalize()
}

/// Names of the subcommands on the matched path, root excluded.
pub fn command_path(matches: &clap::ArgMatches) -> Vec<String> {
    let mut path = Vec::new();
    let mut level = matches;
    while let Some((name, sub)) = level.subcommand() {
        path.push(name.to_string());
        level = sub;
    }
    path
}

/// Walks the tree along `path` to the invoked subcommand.
pub fn find<'c>(root: &'c Command, path: &[String]) -> Option<&'c Command> {
    path.iter()
        .try_fold(root, |cmd, name| cmd.find_subcommand(name))
}
