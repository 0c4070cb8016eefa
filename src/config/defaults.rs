//! Default values for catalog flags.
//!
//! These literals are the exact defaults exposed on the command line.
//! Typed equivalents are provided where consumers need them directly.

use std::time::Duration;

/// Default pagination offset.
pub const PAGINATION_OFFSET: &str = "0";

/// Default pagination limit.
pub const PAGINATION_LIMIT: &str = "10";

/// Default query height (0 means latest).
pub const HEIGHT: &str = "0";

/// Default timeout between relayer runs, parsed by [`crate::resolve::resolve_timeout`].
pub const TIMEOUT: &str = "10s";

/// Default timeout height offset.
pub const TIMEOUT_HEIGHT_OFFSET: &str = "0";

/// Default timeout time offset.
pub const TIMEOUT_TIME_OFFSET: &str = "0s";

/// Default max transaction size for the relay strategy.
pub const MAX_TX_SIZE: &str = "2";

/// Default max messages per relay transaction.
pub const MAX_MSGS: &str = "5";

/// Default maximum retries after a failed message send.
pub const MAX_RETRIES: &str = "3";

/// Default time before client expiry at which to update the client.
pub const TIME_THRESHOLD: &str = "6h";

/// Default channel version.
pub const CHANNEL_VERSION: &str = "ics20-1";

/// Default port used when generating a path.
pub const PORT: &str = "transfer";

/// Default timeout between relayer runs as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(10)
}

/// Default update time threshold as Duration.
#[must_use]
pub const fn time_threshold() -> Duration {
    Duration::from_secs(6 * 60 * 60)
}
