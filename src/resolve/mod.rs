//! Helpers that turn resolved flag values into what command handlers need.
//!
//! This module provides:
//! - Timeout parsing ([`resolve_timeout`], [`timeout_from`])
//! - File/URL input selection ([`resolve_input_source`], [`input_source_from`])
//!
//! Errors here are ordinary results ([`ResolveError`]) for the command to
//! report; they never abort the process.

mod duration;
mod error;
mod input;


pub use duration::{resolve_timeout, timeout_from};
pub use error::ResolveError;
pub use input::{InputSource, input_source_from, resolve_input_source};
