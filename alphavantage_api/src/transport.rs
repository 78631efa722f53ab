//! The network seam: turns an [`Endpoint`] into a response body.

use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::{endpoint::Endpoint, TransportError};

/// Default Alpha Vantage host.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Request timeout applied by [`HttpTransport`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An owned, readable response body. Dropping it releases the underlying
/// resources.
pub type ResponseBody = Box<dyn Read + Send>;

/// Performs the network round trip for a built endpoint.
///
/// Implementations must be shareable across tasks; the client holds one behind
/// an `Arc` and never mutates it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Requests `endpoint` and returns its body, or the failure that prevented it.
    async fn request(&self, endpoint: &Endpoint) -> Result<ResponseBody, TransportError>;
}

/// HTTPS transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport for the production Alpha Vantage host.
    pub fn new() -> Result<Self, TransportError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| TransportError::Client(format!("invalid base URL: {}", e)))?;
        Self::with_base_url(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a transport for a custom host. Used for testing with wiremock.
    pub fn with_base_url(base_url: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, endpoint: &Endpoint) -> Result<ResponseBody, TransportError> {
        let url = endpoint.add_to_url(&self.base_url);
        let resp = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            TransportError::from(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            TransportError::from(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(Box::new(Cursor::new(body)))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((end, _)) => format!("{}...[truncated]", &body[..end]),
    }
}
