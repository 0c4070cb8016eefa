//! Tests for the flag catalog.

use std::collections::HashSet;

use super::catalog::{FlagDef, FlagGroup, shared};
use crate::config::{FlagKind, Value};

type Row = (&'static str, Option<char>, FlagKind, &'static str);

/// The command-line contract for every group.
fn expected(group: FlagGroup) -> Vec<Row> {
    use FlagKind::{Bool, Duration, Int, Str, Uint};

    match group {
        FlagGroup::IbcDenom => vec![("ibc-denoms", Some('i'), Bool, "false")],
        FlagGroup::Height => vec![("height", None, Int, "0")],
        FlagGroup::Pagination => vec![
            ("offset", Some('o'), Uint, "0"),
            ("limit", Some('l'), Uint, "10"),
        ],
        FlagGroup::YamlOutput => vec![("yaml", Some('y'), Bool, "false")],
        FlagGroup::SkipConfirm => vec![("skip", Some('y'), Bool, "false")],
        FlagGroup::Path => vec![("path", Some('p'), Str, "")],
        FlagGroup::Timeouts => vec![
            ("timeout-height-offset", Some('y'), Uint, "0"),
            ("timeout-time-offset", Some('c'), Duration, "0s"),
        ],
        FlagGroup::JsonOutput => vec![("json", Some('j'), Bool, "false")],
        FlagGroup::FileInput => vec![("file", Some('f'), Str, "")],
        FlagGroup::Timeout => vec![("timeout", Some('o'), Str, "10s")],
        FlagGroup::UrlInput => vec![("url", Some('u'), Str, "")],
        FlagGroup::Strategy => vec![
            ("max-tx-size", Some('s'), Str, "2"),
            ("max-msgs", Some('l'), Str, "5"),
        ],
        FlagGroup::Retry => vec![("max-retries", Some('r'), Uint, "3")],
        FlagGroup::UpdateTime => vec![("time-threshold", None, Duration, "6h")],
        FlagGroup::ClientParameters => vec![
            ("update-after-expiry", Some('e'), Bool, "true"),
            ("update-after-misbehaviour", Some('m'), Bool, "true"),
        ],
        FlagGroup::Override => vec![("override", None, Bool, "false")],
        FlagGroup::ChannelOrder => vec![("unordered", Some('o'), Bool, "true")],
        FlagGroup::ChannelVersion => vec![("version", Some('v'), Str, "ics20-1")],
        FlagGroup::Port => vec![("port", Some('p'), Str, "transfer")],
    }
}

fn rows(defs: &[FlagDef]) -> Vec<Row> {
    defs.iter()
        .map(|d| (d.name, d.short, d.kind, d.default))
        .collect()
}

mod contract {
    use super::*;

    #[test]
    fn every_group_matches_cli_contract() {
        for group in FlagGroup::ALL {
            assert_eq!(rows(group.flags()), expected(group), "group {group}");
        }
    }

    #[test]
    fn all_lists_each_group_once() {
        let unique: HashSet<_> = FlagGroup::ALL.iter().collect();
        assert_eq!(unique.len(), FlagGroup::ALL.len());
    }

    #[test]
    fn group_names_are_unique_and_kebab_case() {
        let names: HashSet<_> = FlagGroup::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names.len(), FlagGroup::ALL.len());

        for name in names {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{name}"
            );
        }
    }

    #[test]
    fn flag_names_are_never_empty() {
        for group in FlagGroup::ALL {
            for def in group.flags() {
                assert!(!def.name.is_empty(), "group {group}");
                assert!(!def.help.is_empty(), "--{}", def.name);
            }
        }
    }

    #[test]
    fn shorthands_are_unique_within_each_group() {
        for group in FlagGroup::ALL {
            let shorts: Vec<char> = group.flags().iter().filter_map(|d| d.short).collect();
            let unique: HashSet<_> = shorts.iter().collect();
            assert_eq!(unique.len(), shorts.len(), "group {group}");
        }
    }
}

mod bindings {
    use super::*;

    #[test]
    fn keys_default_to_flag_names() {
        for group in FlagGroup::ALL {
            for def in group.flags() {
                assert_eq!(def.key, def.name);
            }
        }
    }

    #[test]
    fn height_and_pagination_use_shared_keys() {
        let keys: Vec<_> = FlagGroup::Pagination.flags().iter().map(|d| d.key).collect();
        assert_eq!(keys, vec![shared::OFFSET, shared::LIMIT]);
        assert_eq!(FlagGroup::Height.flags()[0].key, shared::HEIGHT);
    }

    #[test]
    fn every_default_parses_as_its_kind() {
        for group in FlagGroup::ALL {
            for def in group.flags() {
                let binding = def.binding().unwrap();
                assert_eq!(binding.kind, def.kind, "--{}", def.name);
                assert_eq!(binding.default.kind(), def.kind, "--{}", def.name);
            }
        }
    }

    #[test]
    fn typed_defaults() {
        let threshold = FlagGroup::UpdateTime.flags()[0].binding().unwrap();
        assert_eq!(
            threshold.default,
            Value::Duration(crate::config::defaults::time_threshold())
        );

        let limit = FlagGroup::Pagination.flags()[1].binding().unwrap();
        assert_eq!(limit.default, Value::Uint(10));

        let path = FlagGroup::Path.flags()[0].binding().unwrap();
        assert_eq!(path.default, Value::Str(String::new()));
    }
}

mod lookup {
    use super::*;

    #[test]
    fn repeated_lookups_are_identical() {
        for group in FlagGroup::ALL {
            let first = group.flags();
            let second = group.flags();
            assert_eq!(first, second);
            assert!(std::ptr::eq(first, second), "group {group}");
        }
    }

    #[test]
    fn display_uses_group_name() {
        assert_eq!(FlagGroup::ClientParameters.to_string(), "client-parameters");
        assert_eq!(FlagGroup::YamlOutput.to_string(), "yaml-output");
    }
}
