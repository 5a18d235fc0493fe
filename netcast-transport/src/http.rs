//! HTTP transport backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::trace;

use netcast_core::constants;
use netcast_core::DEFAULT_TIMEOUT;

use crate::{error::*, ExchangeRequest, ExchangeResponse, Transport};

/// HTTP transport for NetCast TVs
///
/// One plain-HTTP round trip per exchange, bounded by a per-request
/// timeout. The TV closes idle connections quickly, so no connection state
/// is kept beyond reqwest's own pool.
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport with the protocol default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a new HTTP transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::Configuration)?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn exchange(&self, url: &str, request: ExchangeRequest) -> Result<ExchangeResponse> {
        let builder = match request {
            ExchangeRequest::Post { body } => {
                trace!(url, body = %body, "POST");
                self.client
                    .post(url)
                    .header(CONTENT_TYPE, constants::CONTENT_TYPE)
                    .body(body)
            }
            ExchangeRequest::Get { params } => {
                trace!(url, ?params, "GET");
                self.client.get(url).query(&params)
            }
        };

        let response = builder.timeout(self.timeout).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        trace!(status, body = %body, "response");

        Ok(ExchangeResponse { status, body })
    }
}
