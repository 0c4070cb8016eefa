//! Fluent builder that composes flag groups onto one subcommand.

use clap::Command;

use super::arg::to_arg;
use super::catalog::{FlagDef, FlagGroup};
use super::error::CompositionError;
use crate::config::{Binding, ConfigStore};

/// Registers catalog flag groups on a subcommand and binds them into a store.
///
/// A composer lives only while a subcommand is being built:
///
/// ```
/// use clap::Command;
/// use relayer_flags::config::ConfigStore;
/// use relayer_flags::flags::FlagComposer;
///
/// let mut store = ConfigStore::new();
/// let cmd = FlagComposer::attach(&mut store, Command::new("channels"))
///     .pagination()
///     .json_output()
///     .finalize();
///
/// assert!(cmd.get_arguments().any(|a| a.get_id() == "limit"));
/// assert!(store.binding("limit").is_some());
/// ```
///
/// Every flag is registered and bound in one step, so no flag ever exists
/// registered but unbound. A group either applies completely or not at all.
#[derive(Debug)]
pub struct FlagComposer<'s> {
    store: &'s mut ConfigStore,
    command: Command,
    applied: Vec<FlagGroup>,
}

impl<'s> FlagComposer<'s> {
    /// Attaches a composer to a subcommand and the store its flags bind into.
    ///
    /// Only arguments already defined on `command` are checked for
    /// collisions. Global arguments inherited from a parent command are not
    /// visible here, so they must not reuse a catalog name or shorthand.
    #[must_use]
    pub fn attach(store: &'s mut ConfigStore, command: Command) -> Self {
        Self {
            store,
            command,
            applied: Vec::new(),
        }
    }

    /// Returns the subcommand with every applied group registered.
    #[must_use]
    pub fn finalize(self) -> Command {
        self.command
    }

    /// The subcommand as composed so far.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Groups applied so far, in order.
    #[must_use]
    pub fn groups(&self) -> &[FlagGroup] {
        &self.applied
    }

    /// Applies a group, returning composition errors instead of panicking.
    ///
    /// On error neither the subcommand nor the store is modified.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag name or shorthand of the group is already
    /// registered on the subcommand, or if one of its configuration keys is
    /// already bound to a different flag definition.
    pub fn try_apply(&mut self, group: FlagGroup) -> Result<(), CompositionError> {
        let defs = group.flags();
        let bindings = self.check(group, defs)?;

        let command = std::mem::replace(&mut self.command, Command::new(""));
        self.command = defs
            .iter()
            .fold(command, |command, def| command.arg(to_arg(def)));

        for (def, binding) in defs.iter().zip(bindings) {
            self.store.bind(def.key, binding);
        }

        self.applied.push(group);
        tracing::debug!(
            "Registered flag group '{group}' on '{}' (groups: {:?})",
            self.command.get_name(),
            self.groups()
        );
        Ok(())
    }

    /// Applies a group.
    ///
    /// # Panics
    ///
    /// Panics if the group conflicts with flags already on the subcommand or
    /// with existing store bindings. The command tree is fixed at build time,
    /// so a conflict is a bug that must stop startup.
    #[must_use]
    pub fn apply(mut self, group: FlagGroup) -> Self {
        if let Err(e) = self.try_apply(group) {
            panic!("invalid command definition: {e}");
        }
        self
    }

    /// Validates a group against the subcommand and store, producing its bindings.
    fn check(
        &self,
        group: FlagGroup,
        defs: &'static [FlagDef],
    ) -> Result<Vec<Binding>, CompositionError> {
        let command = self.command.get_name();
        // Ids are claimed as well as longs, since catalog flags use id == long
        let mut longs: Vec<&str> = Vec::new();
        let mut shorts: Vec<(char, &str)> = Vec::new();
        for arg in self.command.get_arguments() {
            let id = arg.get_id().as_str();
            let label = arg.get_long().unwrap_or(id);
            longs.push(id);
            longs.extend(arg.get_long());
            longs.extend(arg.get_all_aliases().unwrap_or_default());
            shorts.extend(arg.get_short().map(|short| (short, label)));
            shorts.extend(
                arg.get_all_short_aliases()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|short| (short, label)),
            );
        }

        let mut bindings = Vec::with_capacity(defs.len());
        for def in defs {
            if longs.contains(&def.name) {
                return Err(CompositionError::DuplicateFlag {
                    command: command.to_string(),
                    group,
                    flag: def.name,
                });
            }

            if let Some(short) = def.short {
                if let Some((_, existing)) = shorts.iter().find(|(s, _)| *s == short) {
                    return Err(CompositionError::DuplicateShorthand {
                        command: command.to_string(),
                        group,
                        short,
                        flag: def.name,
                        existing: (*existing).to_string(),
                    });
                }
                shorts.push((short, def.name));
            }
            longs.push(def.name);

            let binding = def
                .binding()
                .map_err(|reason| CompositionError::InvalidDefault {
                    group,
                    flag: def.name,
                    default: def.default,
                    reason,
                })?;

            if let Some(existing) = self.store.conflicting_binding(def.key, &binding) {
                return Err(CompositionError::BindingConflict {
                    group,
                    key: def.key,
                    existing: existing.clone(),
                    requested: binding,
                });
            }
            bindings.push(binding);
        }

        Ok(bindings)
    }

    /// `--ibc-denoms/-i`
    #[must_use]
    pub fn ibc_denom(self) -> Self {
        self.apply(FlagGroup::IbcDenom)
    }

    /// `--height`
    #[must_use]
    pub fn height(self) -> Self {
        self.apply(FlagGroup::Height)
    }

    /// `--offset/-o`, `--limit/-l`
    #[must_use]
    pub fn pagination(self) -> Self {
        self.apply(FlagGroup::Pagination)
    }

    /// `--yaml/-y`
    #[must_use]
    pub fn yaml_output(self) -> Self {
        self.apply(FlagGroup::YamlOutput)
    }

    /// `--skip/-y`
    #[must_use]
    pub fn skip_confirm(self) -> Self {
        self.apply(FlagGroup::SkipConfirm)
    }

    /// `--path/-p`
    #[must_use]
    pub fn path(self) -> Self {
        self.apply(FlagGroup::Path)
    }

    /// `--timeout-height-offset/-y`, `--timeout-time-offset/-c`
    #[must_use]
    pub fn timeouts(self) -> Self {
        self.apply(FlagGroup::Timeouts)
    }

    /// `--json/-j`
    #[must_use]
    pub fn json_output(self) -> Self {
        self.apply(FlagGroup::JsonOutput)
    }

    /// `--file/-f`
    #[must_use]
    pub fn file_input(self) -> Self {
        self.apply(FlagGroup::FileInput)
    }

    /// `--timeout/-o`
    #[must_use]
    pub fn timeout(self) -> Self {
        self.apply(FlagGroup::Timeout)
    }

    /// `--url/-u`
    #[must_use]
    pub fn url_input(self) -> Self {
        self.apply(FlagGroup::UrlInput)
    }

    /// `--max-tx-size/-s`, `--max-msgs/-l`
    #[must_use]
    pub fn strategy(self) -> Self {
        self.apply(FlagGroup::Strategy)
    }

    /// `--max-retries/-r`
    #[must_use]
    pub fn retry(self) -> Self {
        self.apply(FlagGroup::Retry)
    }

    /// `--time-threshold`
    #[must_use]
    pub fn update_time(self) -> Self {
        self.apply(FlagGroup::UpdateTime)
    }

    /// `--update-after-expiry/-e`, `--update-after-misbehaviour/-m`
    #[must_use]
    pub fn client_parameters(self) -> Self {
        self.apply(FlagGroup::ClientParameters)
    }

    /// `--override`
    #[must_use]
    pub fn override_client(self) -> Self {
        self.apply(FlagGroup::Override)
    }

    /// `--unordered/-o`
    #[must_use]
    pub fn channel_order(self) -> Self {
        self.apply(FlagGroup::ChannelOrder)
    }

    /// `--version/-v`
    #[must_use]
    pub fn channel_version(self) -> Self {
        self.apply(FlagGroup::ChannelVersion)
    }

    /// `--port/-p`
    #[must_use]
    pub fn port(self) -> Self {
        self.apply(FlagGroup::Port)
    }
}
