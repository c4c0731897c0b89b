//! HTTP seam for the sales order client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use super::error::TransportError;

/// A single GET against the sales order endpoint.
pub struct OrderRequest<'a> {
    /// Endpoint URL, without query string.
    pub url: &'a str,
    /// Value for `$top`.
    pub top: u32,
    /// Value for `$select`.
    pub select: &'a str,
    /// Sent as the `apikey` header.
    pub api_key: &'a SecretString,
}

impl OrderRequest<'_> {
    /// Query parameters in the order they are sent.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("$top", self.top.to_string()),
            ("$select", self.select.to_string()),
        ]
    }
}

impl std::fmt::Debug for OrderRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderRequest")
            .field("url", &self.url)
            .field("top", &self.top)
            .field("select", &self.select)
            .finish_non_exhaustive()
    }
}

/// What came back, before any interpretation.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    /// Final URL of the request, query string included.
    pub url: String,
    pub body: String,
}

/// Sends sales order requests. Implemented by [`ReqwestTransport`] and by
/// the test stubs in [`crate::testing`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: &OrderRequest<'_>) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport. Uses the client's default timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("saptools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &OrderRequest<'_>) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(request.url)
            .query(&request.query())
            // The gateway only accepts the lowercase header name.
            .header("apikey", request.api_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let url = response.url().to_string();

        // The whole page is read; `$top` is the only bound on its size.
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(TransportResponse {
            status,
            url,
            body,
        })
    }
}
