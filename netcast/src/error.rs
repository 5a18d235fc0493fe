//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Protocol error: {0}")]
    Core(#[from] netcast_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] netcast_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] netcast_types::Error),
}

impl Error {
    /// Check whether this is the missing-pairing-key failure
    ///
    /// Callers handle it specially: the TV is now displaying the key, and
    /// the user must pass it back in before retrying.
    pub fn is_access_token(&self) -> bool {
        matches!(self, Self::Core(netcast_core::Error::AccessToken))
    }
}
