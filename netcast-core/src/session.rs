//! Session management for the ROAP protocol
//!
//! A session represents an authorized conversation with the TV and tracks:
//! - Session id (assigned by the TV after authentication)
//! - Authentication state
//!
//! The session is scoped: it is acquired lazily before the first protocol
//! operation and discarded when the client is closed, never persisted.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};

/// Session id assigned by the TV
///
/// Opaque string; the TV is known to return ids of at least
/// [`SessionId::MIN_LEN`] characters, anything shorter is rejected as a
/// malformed auth response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Minimum length of a valid session id
    pub const MIN_LEN: usize = 8;

    /// Validate and wrap a session id
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.len() < Self::MIN_LEN {
            return Err(Error::SessionId(format!(
                "session id {:?} is shorter than {} characters",
                id,
                Self::MIN_LEN
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session acquired yet
    NoSession,

    /// Authentication request in flight
    Authenticating,

    /// Authenticated and ready for commands and queries
    Authenticated(SessionId),

    /// Last acquisition attempt failed; no session obtainable until retried
    AuthFailed,
}

/// Session manager
///
/// Tracks the session lifecycle. Thread-safe and cheap to clone (Arc
/// internally), although the protocol itself allows only one logical
/// session per client.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    state: parking_lot::RwLock<SessionState>,
}

impl Default for SessionInner {
    fn default() -> Self {
        Self {
            state: parking_lot::RwLock::new(SessionState::NoSession),
        }
    }
}

impl Session {
    /// Create a new session in the `NoSession` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.inner.state.read().clone()
    }

    /// Check if authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.inner.state.read(), SessionState::Authenticated(_))
    }

    /// Current session id, if authenticated
    pub fn session_id(&self) -> Option<SessionId> {
        match &*self.inner.state.read() {
            SessionState::Authenticated(id) => Some(id.clone()),
            _ => None,
        }
    }

    /// Begin an acquisition attempt
    ///
    /// Allowed from `NoSession` and from `AuthFailed` (a failed attempt may
    /// be retried, e.g. after the caller supplies the pairing key).
    pub fn begin(&self) -> Result<()> {
        let mut state = self.inner.state.write();

        match *state {
            SessionState::NoSession | SessionState::AuthFailed => {
                *state = SessionState::Authenticating;
                Ok(())
            }
            ref other => Err(Error::InvalidSessionState(format!(
                "cannot begin authentication from state: {other:?}"
            ))),
        }
    }

    /// Complete the acquisition attempt with the id the TV returned
    pub fn authenticate(&self, session_id: SessionId) -> Result<()> {
        let mut state = self.inner.state.write();

        if *state != SessionState::Authenticating {
            return Err(Error::InvalidSessionState(format!(
                "cannot authenticate from state: {:?}",
                *state
            )));
        }

        debug!(session_id = %session_id, "session authenticated");
        *state = SessionState::Authenticated(session_id);
        Ok(())
    }

    /// Mark the current acquisition attempt as failed
    pub fn fail(&self) -> Result<()> {
        let mut state = self.inner.state.write();

        if *state != SessionState::Authenticating {
            return Err(Error::InvalidSessionState(format!(
                "cannot fail authentication from state: {:?}",
                *state
            )));
        }

        *state = SessionState::AuthFailed;
        Ok(())
    }

    /// Discard the session
    ///
    /// Valid from any state; the client returns to `NoSession` when its
    /// usage scope ends.
    pub fn close(&self) {
        debug!("session closed");
        *self.inner.state.write() = SessionState::NoSession;
    }
}
