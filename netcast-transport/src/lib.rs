//! Transport layer for the ROAP protocol
//!
//! Provides the single `exchange` primitive the client is built on: one
//! bounded HTTP round trip against a device-relative URL. The trait exists
//! so protocol logic can be tested against a scripted transport without any
//! network.

pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::HttpTransport;

use async_trait::async_trait;

/// Request side of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeRequest {
    /// POST an XML envelope (auth and command requests)
    Post {
        /// Request body, sent with the fixed protocol content type
        body: String,
    },

    /// GET with query parameters (data queries)
    Get {
        /// Query parameters appended to the URL
        params: Vec<(String, String)>,
    },
}

impl ExchangeRequest {
    /// POST request with the given envelope body
    pub fn post(body: impl Into<String>) -> Self {
        Self::Post { body: body.into() }
    }

    /// GET request with a single query parameter
    pub fn get(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Get {
            params: vec![(param.into(), value.into())],
        }
    }
}

/// Response side of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResponse {
    /// HTTP status code
    pub status: u16,

    /// Raw response body
    pub body: String,
}

impl ExchangeResponse {
    /// Check for a 2xx status
    ///
    /// An application-level non-success status is distinct from a transport
    /// [`Error`]: the exchange completed, the device declined.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait for performing protocol exchanges
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange
    ///
    /// Every call is bounded by the transport's timeout; a timeout or
    /// connection failure is a transport error, never a hang.
    async fn exchange(&self, url: &str, request: ExchangeRequest) -> Result<ExchangeResponse>;
}
