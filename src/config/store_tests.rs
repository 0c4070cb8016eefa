//! Tests for the layered configuration store.

use std::io::Write;
use std::time::Duration;

use clap::Command;

use super::error::{ConfigError, Layer};
use super::store::{ConfigStore, env_var_name};
use super::value::{FlagKind, Value};
use crate::flags::{FlagComposer, names, shared};

/// A `tx link`-like command bound into `store`.
fn link(store: &mut ConfigStore) -> Command {
    FlagComposer::attach(store, Command::new("link"))
        .retry()
        .timeout()
        .update_time()
        .client_parameters()
        .finalize()
}

/// Parses `args` against `link` and loads the matches into `store`.
fn load(store: &mut ConfigStore, args: &[&str]) {
    let cmd = link(store);
    let mut full_args = vec!["link"];
    full_args.extend(args);
    let matches = cmd.try_get_matches_from(full_args).unwrap();
    store.load_matches(&matches);
}

fn env(vars: &[(&str, &str)]) -> Vec<(String, String)> {
    vars.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

mod precedence {
    use super::*;

    #[test]
    fn flag_default_when_nothing_else_is_set() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 3);
        assert_eq!(store.get_str(names::TIMEOUT).unwrap(), "10s");
        assert!(store.get_bool(names::UPDATE_AFTER_EXPIRY).unwrap());
    }

    #[test]
    fn file_beats_flag_default() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.merge_toml("max-retries = 5\ntime-threshold = \"1h\"").unwrap();

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 5);
        assert_eq!(
            store.get_duration(names::TIME_THRESHOLD).unwrap(),
            Duration::from_secs(3_600)
        );
    }

    #[test]
    fn env_beats_file() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.merge_toml("max-retries = 5").unwrap();
        store.load_env_from("rly", env(&[("RLY_MAX_RETRIES", "6")]));

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 6);
    }

    #[test]
    fn explicit_flag_beats_env_and_file() {
        let mut store = ConfigStore::new();
        load(&mut store, &["--max-retries", "7"]);
        store.merge_toml("max-retries = 5").unwrap();
        store.load_env_from("RLY", env(&[("RLY_MAX_RETRIES", "6")]));

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 7);
    }

    #[test]
    fn override_beats_everything() {
        let mut store = ConfigStore::new();
        load(&mut store, &["--max-retries", "7"]);
        store.set(names::MAX_RETRIES, Value::Uint(9)).unwrap();

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 9);
    }

    #[test]
    fn env_ignores_other_prefixes() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.load_env_from(
            "RLY",
            env(&[("OTHER_MAX_RETRIES", "1"), ("RLYX_MAX_RETRIES", "2")]),
        );

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 3);
    }

    #[test]
    fn binding_default_before_any_parse() {
        let mut store = ConfigStore::new();
        let _ = link(&mut store);

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 3);
        assert_eq!(
            store.get_duration(names::TIME_THRESHOLD).unwrap(),
            crate::config::defaults::time_threshold()
        );
    }
}

mod overlays {
    use super::*;

    #[test]
    fn table_for_scalar_key_is_invalid() {
        let mut store = ConfigStore::new();
        let _ = FlagComposer::attach(&mut store, Command::new("q"))
            .pagination()
            .finalize();
        store.merge_toml("offset = 30\n[limit]\nmax = 5\n").unwrap();

        assert_eq!(store.get_u64(shared::OFFSET).unwrap(), 30);
        assert!(matches!(
            store.get_u64(shared::LIMIT),
            Err(ConfigError::InvalidValue {
                layer: Layer::File,
                ..
            })
        ));
    }

    #[test]
    fn later_merges_win() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.merge_toml("max-retries = 1\ntimeout = \"1s\"").unwrap();
        store.merge_toml("max-retries = 2").unwrap();

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 2);
        assert_eq!(store.get_str(names::TIMEOUT).unwrap(), "1s");
    }

    #[test]
    fn invalid_env_value_names_the_layer() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.load_env_from("RLY", env(&[("RLY_MAX_RETRIES", "lots")]));

        assert!(matches!(
            store.get(names::MAX_RETRIES),
            Err(ConfigError::InvalidValue {
                layer: Layer::Env,
                ..
            })
        ));
    }

    #[test]
    fn env_strings_keep_whitespace_and_numbers_are_trimmed() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.load_env_from(
            "RLY",
            env(&[("RLY_TIMEOUT", " 30s "), ("RLY_MAX_RETRIES", " 4 ")]),
        );

        assert_eq!(store.get_str(names::TIMEOUT).unwrap(), " 30s ");
        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 4);
    }

    #[test]
    fn invalid_file_value_names_the_layer() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.merge_toml("update-after-expiry = 3").unwrap();

        assert!(matches!(
            store.get(names::UPDATE_AFTER_EXPIRY),
            Err(ConfigError::InvalidValue {
                layer: Layer::File,
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let mut store = ConfigStore::new();
        assert!(matches!(
            store.merge_toml("max-retries = "),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn load_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max-retries = 11").unwrap();

        let mut store = ConfigStore::new();
        load(&mut store, &[]);
        store.load_file(file.path()).unwrap();

        assert_eq!(store.get_u64(names::MAX_RETRIES).unwrap(), 11);
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::new();

        assert!(matches!(
            store.load_file(&dir.path().join("absent.toml")),
            Err(ConfigError::FileRead { .. })
        ));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn unknown_key() {
        let store = ConfigStore::new();
        assert!(matches!(
            store.get("max-retries"),
            Err(ConfigError::UnknownKey { .. })
        ));
    }

    #[test]
    fn typed_getter_mismatch() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);

        assert!(matches!(
            store.get_bool(names::MAX_RETRIES),
            Err(ConfigError::TypeMismatch {
                expected: FlagKind::Bool,
                found: FlagKind::Uint,
                ..
            })
        ));
    }

    #[test]
    fn set_rejects_wrong_kind_and_unknown_keys() {
        let mut store = ConfigStore::new();
        load(&mut store, &[]);

        assert!(matches!(
            store.set(names::MAX_RETRIES, Value::Str("7".to_string())),
            Err(ConfigError::TypeMismatch { .. })
        ));
        assert!(matches!(
            store.set("nope", Value::Bool(true)),
            Err(ConfigError::UnknownKey { .. })
        ));
    }

    #[test]
    fn snapshot_resolves_every_key() {
        let mut store = ConfigStore::new();
        load(&mut store, &["-r", "4", "--update-after-misbehaviour=false"]);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(
            snapshot.keys().map(String::as_str).collect::<Vec<_>>(),
            vec![
                "max-retries",
                "time-threshold",
                "timeout",
                "update-after-expiry",
                "update-after-misbehaviour",
            ]
        );
        assert_eq!(snapshot["max-retries"], Value::Uint(4));
        assert_eq!(snapshot["update-after-misbehaviour"], Value::Bool(false));
    }

    #[test]
    fn env_var_names() {
        assert_eq!(env_var_name("rly", "max-retries"), "RLY_MAX_RETRIES");
        assert_eq!(env_var_name("RLY", "chains.gaia"), "RLY_CHAINS_GAIA");
    }
}

mod bindings {
    use super::*;

    #[test]
    fn identical_rebinding_is_shared() {
        let mut store = ConfigStore::new();
        let _ = FlagComposer::attach(&mut store, Command::new("a"))
            .pagination()
            .finalize();
        let _ = FlagComposer::attach(&mut store, Command::new("b"))
            .pagination()
            .finalize();

        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["limit", "offset"]);
    }

    #[test]
    fn conflicting_binding_is_reported() {
        let mut store = ConfigStore::new();
        let _ = FlagComposer::attach(&mut store, Command::new("a"))
            .retry()
            .finalize();

        let other = crate::config::Binding {
            flag: names::MAX_RETRIES,
            kind: FlagKind::Str,
            default: Value::Str("3".to_string()),
        };
        let existing = store.conflicting_binding(names::MAX_RETRIES, &other).unwrap();
        assert_eq!(existing.kind, FlagKind::Uint);
    }
}
