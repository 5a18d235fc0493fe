//! # netcast-core
//!
//! Core ROAP protocol implementation for LG NetCast TVs.
//!
//! This crate provides the protocol primitives:
//! - XML request envelope building and response parsing
//! - Remote key and status query definitions
//! - Protocol constants
//! - Session state machine
//!
//! Transport and the high-level client live in the `netcast-transport` and
//! `netcast` crates.

pub mod constants;
pub mod envelope;
pub mod error;
pub mod key;
pub mod query;
pub mod session;

pub use constants::Protocol;
pub use error::{Error, Result};
pub use key::RemoteKey;
pub use query::Query;
pub use session::{Session, SessionId, SessionState};

/// Fixed port the TV listens on
pub const DEFAULT_PORT: u16 = 8080;

/// Default exchange timeout (seconds)
pub const DEFAULT_TIMEOUT: u64 = 3;
