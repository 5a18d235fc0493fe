//! Type definitions for netcast

pub mod channel;
pub mod data;
pub mod error;

pub use channel::ChannelDescriptor;
pub use data::DataFragment;
pub use error::{Error, Result};
