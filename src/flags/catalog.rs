//! The flag catalog: every reusable flag group and the flags it registers.
//!
//! Groups are identified by [`FlagGroup`], so an unknown group cannot be
//! requested at runtime. Definitions are `'static` and never mutated.

use std::fmt;

use crate::config::{Binding, FlagKind, defaults};

/// Flag long names, which double as their configuration keys.
pub mod names {
    /// `--ibc-denoms`
    pub const IBC_DENOMS: &str = "ibc-denoms";
    /// `--yaml`
    pub const YAML: &str = "yaml";
    /// `--skip`
    pub const SKIP: &str = "skip";
    /// `--path`
    pub const PATH: &str = "path";
    /// `--timeout-height-offset`
    pub const TIMEOUT_HEIGHT_OFFSET: &str = "timeout-height-offset";
    /// `--timeout-time-offset`
    pub const TIMEOUT_TIME_OFFSET: &str = "timeout-time-offset";
    /// `--json`
    pub const JSON: &str = "json";
    /// `--file`
    pub const FILE: &str = "file";
    /// `--timeout`
    pub const TIMEOUT: &str = "timeout";
    /// `--url`
    pub const URL: &str = "url";
    /// `--max-tx-size`
    pub const MAX_TX_SIZE: &str = "max-tx-size";
    /// `--max-msgs`
    pub const MAX_MSGS: &str = "max-msgs";
    /// `--max-retries`
    pub const MAX_RETRIES: &str = "max-retries";
    /// `--time-threshold`
    pub const TIME_THRESHOLD: &str = "time-threshold";
    /// `--update-after-expiry`
    pub const UPDATE_AFTER_EXPIRY: &str = "update-after-expiry";
    /// `--update-after-misbehaviour`
    pub const UPDATE_AFTER_MISBEHAVIOUR: &str = "update-after-misbehaviour";
    /// `--override`
    pub const OVERRIDE: &str = "override";
    /// `--unordered`
    pub const UNORDERED: &str = "unordered";
    /// `--version`
    pub const VERSION: &str = "version";
    /// `--port`
    pub const PORT: &str = "port";
}

/// Keys owned by the chain SDK's flag namespace.
///
/// Every subcommand applying `height` or `pagination` reads and writes
/// these same keys.
pub mod shared {
    /// `--height`
    pub const HEIGHT: &str = "height";
    /// `--offset`
    pub const OFFSET: &str = "offset";
    /// `--limit`
    pub const LIMIT: &str = "limit";
}

/// One command-line flag and the configuration key it binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDef {
    /// Long name, kebab-case
    pub name: &'static str,
    /// Single-character shorthand
    pub short: Option<char>,
    /// Value kind
    pub kind: FlagKind,
    /// Default as it appears on the command line
    pub default: &'static str,
    /// Help text
    pub help: &'static str,
    /// Configuration store key
    pub key: &'static str,
}

impl FlagDef {
    const fn new(
        name: &'static str,
        short: Option<char>,
        kind: FlagKind,
        default: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            short,
            kind,
            default,
            help,
            key: name,
        }
    }

    /// Binds to a key from an external namespace instead of the flag name.
    const fn bound_to(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    /// Builds the store binding for this flag.
    ///
    /// # Errors
    ///
    /// Returns the parse failure reason if the default literal is not valid
    /// for the flag's kind.
    pub fn binding(&self) -> Result<Binding, String> {
        Ok(Binding {
            flag: self.name,
            kind: self.kind,
            default: self.kind.parse(self.default)?,
        })
    }
}

/// Identifier of a flag group in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagGroup {
    /// Display IBC denominations
    IbcDenom,
    /// Query height
    Height,
    /// Pagination offset and limit
    Pagination,
    /// YAML output
    YamlOutput,
    /// Answer yes to prompts
    SkipConfirm,
    /// Path to relay over
    Path,
    /// Packet timeout offsets
    Timeouts,
    /// JSON output
    JsonOutput,
    /// Read input from a file
    FileInput,
    /// Timeout between relayer runs
    Timeout,
    /// Fetch input from a URL
    UrlInput,
    /// Relay strategy limits
    Strategy,
    /// Retries after a failed send
    Retry,
    /// Client update threshold
    UpdateTime,
    /// Client governance parameters
    ClientParameters,
    /// Do not reuse existing clients
    Override,
    /// Channel ordering
    ChannelOrder,
    /// Channel version
    ChannelVersion,
    /// Port used for path generation
    Port,
}

impl FlagGroup {
    /// Every group in the catalog.
    pub const ALL: [Self; 19] = [
        Self::IbcDenom,
        Self::Height,
        Self::Pagination,
        Self::YamlOutput,
        Self::SkipConfirm,
        Self::Path,
        Self::Timeouts,
        Self::JsonOutput,
        Self::FileInput,
        Self::Timeout,
        Self::UrlInput,
        Self::Strategy,
        Self::Retry,
        Self::UpdateTime,
        Self::ClientParameters,
        Self::Override,
        Self::ChannelOrder,
        Self::ChannelVersion,
        Self::Port,
    ];

    /// Group name as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IbcDenom => "ibc-denom",
            Self::Height => "height",
            Self::Pagination => "pagination",
            Self::YamlOutput => "yaml-output",
            Self::SkipConfirm => "skip-confirm",
            Self::Path => "path",
            Self::Timeouts => "timeouts",
            Self::JsonOutput => "json-output",
            Self::FileInput => "file-input",
            Self::Timeout => "timeout",
            Self::UrlInput => "url-input",
            Self::Strategy => "strategy",
            Self::Retry => "retry",
            Self::UpdateTime => "update-time",
            Self::ClientParameters => "client-parameters",
            Self::Override => "override",
            Self::ChannelOrder => "channel-order",
            Self::ChannelVersion => "channel-version",
            Self::Port => "port",
        }
    }

    /// The flags this group registers, in registration order.
    #[must_use]
    pub fn flags(self) -> &'static [FlagDef] {
        match self {
            Self::IbcDenom => &IBC_DENOM,
            Self::Height => &HEIGHT,
            Self::Pagination => &PAGINATION,
            Self::YamlOutput => &YAML_OUTPUT,
            Self::SkipConfirm => &SKIP_CONFIRM,
            Self::Path => &PATH,
            Self::Timeouts => &TIMEOUTS,
            Self::JsonOutput => &JSON_OUTPUT,
            Self::FileInput => &FILE_INPUT,
            Self::Timeout => &TIMEOUT,
            Self::UrlInput => &URL_INPUT,
            Self::Strategy => &STRATEGY,
            Self::Retry => &RETRY,
            Self::UpdateTime => &UPDATE_TIME,
            Self::ClientParameters => &CLIENT_PARAMETERS,
            Self::Override => &OVERRIDE,
            Self::ChannelOrder => &CHANNEL_ORDER,
            Self::ChannelVersion => &CHANNEL_VERSION,
            Self::Port => &PORT,
        }
    }
}

impl fmt::Display for FlagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static IBC_DENOM: [FlagDef; 1] = [FlagDef::new(
    names::IBC_DENOMS,
    Some('i'),
    FlagKind::Bool,
    "false",
    "Display IBC denominations for sending tokens back to other chains",
)];

static HEIGHT: [FlagDef; 1] = [FlagDef::new(
    shared::HEIGHT,
    None,
    FlagKind::Int,
    defaults::HEIGHT,
    "Height of headers to fetch",
)
.bound_to(shared::HEIGHT)];

static PAGINATION: [FlagDef; 2] = [
    FlagDef::new(
        shared::OFFSET,
        Some('o'),
        FlagKind::Uint,
        defaults::PAGINATION_OFFSET,
        "pagination offset for query",
    )
    .bound_to(shared::OFFSET),
    FlagDef::new(
        shared::LIMIT,
        Some('l'),
        FlagKind::Uint,
        defaults::PAGINATION_LIMIT,
        "pagination limit for query",
    )
    .bound_to(shared::LIMIT),
];

static YAML_OUTPUT: [FlagDef; 1] = [FlagDef::new(
    names::YAML,
    Some('y'),
    FlagKind::Bool,
    "false",
    "output using yaml",
)];

static SKIP_CONFIRM: [FlagDef; 1] = [FlagDef::new(
    names::SKIP,
    Some('y'),
    FlagKind::Bool,
    "false",
    "answer yes to all questions",
)];

static PATH: [FlagDef; 1] = [FlagDef::new(
    names::PATH,
    Some('p'),
    FlagKind::Str,
    "",
    "specify the path to relay over",
)];

static TIMEOUTS: [FlagDef; 2] = [
    FlagDef::new(
        names::TIMEOUT_HEIGHT_OFFSET,
        Some('y'),
        FlagKind::Uint,
        defaults::TIMEOUT_HEIGHT_OFFSET,
        "set timeout height offset for packets",
    ),
    FlagDef::new(
        names::TIMEOUT_TIME_OFFSET,
        Some('c'),
        FlagKind::Duration,
        defaults::TIMEOUT_TIME_OFFSET,
        "set timeout time offset for packets",
    ),
];

static JSON_OUTPUT: [FlagDef; 1] = [FlagDef::new(
    names::JSON,
    Some('j'),
    FlagKind::Bool,
    "false",
    "returns the response in json format",
)];

static FILE_INPUT: [FlagDef; 1] = [FlagDef::new(
    names::FILE,
    Some('f'),
    FlagKind::Str,
    "",
    "fetch json data from specified file",
)];

// Kept as a string flag; parsed with `resolve::resolve_timeout`.
static TIMEOUT: [FlagDef; 1] = [FlagDef::new(
    names::TIMEOUT,
    Some('o'),
    FlagKind::Str,
    defaults::TIMEOUT,
    "timeout between relayer runs",
)];

static URL_INPUT: [FlagDef; 1] = [FlagDef::new(
    names::URL,
    Some('u'),
    FlagKind::Str,
    "",
    "url to fetch data from",
)];

static STRATEGY: [FlagDef; 2] = [
    FlagDef::new(
        names::MAX_TX_SIZE,
        Some('s'),
        FlagKind::Str,
        defaults::MAX_TX_SIZE,
        "strategy of path to generate of the messages in a relay transaction",
    ),
    FlagDef::new(
        names::MAX_MSGS,
        Some('l'),
        FlagKind::Str,
        defaults::MAX_MSGS,
        "maximum number of messages in a relay transaction",
    ),
];

static RETRY: [FlagDef; 1] = [FlagDef::new(
    names::MAX_RETRIES,
    Some('r'),
    FlagKind::Uint,
    defaults::MAX_RETRIES,
    "maximum retries after failed message send",
)];

static UPDATE_TIME: [FlagDef; 1] = [FlagDef::new(
    names::TIME_THRESHOLD,
    None,
    FlagKind::Duration,
    defaults::TIME_THRESHOLD,
    "time before to expiry time to update client",
)];

static CLIENT_PARAMETERS: [FlagDef; 2] = [
    FlagDef::new(
        names::UPDATE_AFTER_EXPIRY,
        Some('e'),
        FlagKind::Bool,
        "true",
        "allow governance to update the client if expiry occurs",
    ),
    FlagDef::new(
        names::UPDATE_AFTER_MISBEHAVIOUR,
        Some('m'),
        FlagKind::Bool,
        "true",
        "allow governance to update the client if misbehaviour freezing occurs",
    ),
];

static OVERRIDE: [FlagDef; 1] = [FlagDef::new(
    names::OVERRIDE,
    None,
    FlagKind::Bool,
    "false",
    "option to not reuse existing client",
)];

static CHANNEL_ORDER: [FlagDef; 1] = [FlagDef::new(
    names::UNORDERED,
    Some('o'),
    FlagKind::Bool,
    "true",
    "create an unordered channel",
)];

static CHANNEL_VERSION: [FlagDef; 1] = [FlagDef::new(
    names::VERSION,
    Some('v'),
    FlagKind::Str,
    defaults::CHANNEL_VERSION,
    "version of channel to create",
)];

static PORT: [FlagDef; 1] = [FlagDef::new(
    names::PORT,
    Some('p'),
    FlagKind::Str,
    defaults::PORT,
    "port to use when generating path",
)];
