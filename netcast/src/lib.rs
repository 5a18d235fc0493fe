//! # netcast
//!
//! Rust client for LG NetCast 3.0/4.0 smart TVs (the ROAP remote-control
//! protocol; pre-2012 models are reachable through the older hdcp dialect).
//!
//! ## Features
//!
//! - Pairing-key session handling with a typed state machine
//! - Remote key presses, channel switching, status queries
//! - Injectable transport for testing without a TV
//!
//! ## Quick Start
//!
//! ```no_run
//! use netcast::{NetCastClient, RemoteKey, Query};
//!
//! #[tokio::main]
//! async fn main() -> netcast::Result<()> {
//!     // The pairing key is displayed on the TV screen on first contact
//!     let mut client = NetCastClient::new("192.168.1.100", Some("ABCD1234".into()))?;
//!     client.connect().await?;
//!
//!     client.send_command(RemoteKey::VolumeUp).await?;
//!
//!     for fragment in client.query_data(Query::CurrentChannel).await? {
//!         println!("{fragment}");
//!     }
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

// Re-exports
pub use client::NetCastClient;
pub use error::{Error, Result};

// Re-export protocol types
pub use netcast_core::{Protocol, Query, RemoteKey, Session, SessionId, SessionState};
pub use netcast_types::{ChannelDescriptor, DataFragment};
