//! Error types for netcast-core

/// Result type alias for core protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No pairing key available to authenticate a session
    ///
    /// The TV has been asked to display one on screen; supply it and retry.
    #[error("No access token specified to create session - pairing key is displayed on the TV")]
    AccessToken,

    /// The TV rejected authentication or returned an unusable session id
    #[error("Can not get session id from TV: {0}")]
    SessionId(String),

    /// Response body is not well-formed XML
    #[error("Malformed XML in response: {0}")]
    Parse(#[from] roxmltree::Error),

    /// Session state machine transition not allowed
    #[error("Invalid session state: {0}")]
    InvalidSessionState(String),

    /// Unknown remote key code
    #[error("Unknown remote key code: {0}")]
    UnknownKey(u16),

    /// Unknown status query id
    #[error("Unknown query id: {0}")]
    UnknownQuery(String),

    /// Unknown protocol dialect
    #[error("Unknown protocol: {0} (expected roap or hdcp)")]
    UnknownProtocol(String),
}

impl Error {
    /// Check if error is recoverable (retry might succeed)
    ///
    /// `AccessToken` is recoverable once the caller supplies the pairing key
    /// shown on screen; `SessionId` rejections are often transient.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AccessToken | Self::SessionId(_))
    }
}
