//! Test doubles for the sales order transport.
//!
//! Provides:
//! - [`StubTransport`]: canned response (or failure) with call counting
//! - [`CapturedRequest`]: what the stub last received
//! - [`sales_orders_body`]: a well-formed API payload with N records
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use saptools::config::SapConfig;
//! use saptools::sap::SalesOrderClient;
//! use saptools::testing::{StubTransport, sales_orders_body};
//!
//! # async fn example() {
//! let stub = Arc::new(StubTransport::ok(sales_orders_body(2)));
//! let client = SalesOrderClient::new(SapConfig::default().with_api_key("k"), stub.clone());
//! let orders = client.fetch(2, None).await.unwrap();
//! assert_eq!(orders.len(), 2);
//! assert_eq!(stub.calls(), 1);
//! # }
//! ```

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;

use crate::sap::{HttpTransport, OrderRequest, TransportError, TransportResponse};

/// Snapshot of a request seen by [`StubTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub url: String,
    pub top: u32,
    pub select: String,
    pub api_key: String,
}

enum Reply {
    Response { status: StatusCode, body: String },
    Fail(String),
}

/// A transport that never leaves the process.
///
/// Every call is counted, even ones configured to fail.
pub struct StubTransport {
    reply: Reply,
    delay: Option<Duration>,
    call_count: AtomicU32,
    last_request: Mutex<Option<CapturedRequest>>,
}

impl StubTransport {
    /// Reply `200 OK` with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// Reply with an arbitrary status.
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(Reply::Response {
            status,
            body: body.into(),
        })
    }

    /// Fail every request at the transport level.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(Reply::Fail(reason.into()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Wait `delay` before replying, to stand in for a slow upstream.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests received.
    pub fn calls(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, request: &OrderRequest<'_>) -> Result<TransportResponse, TransportError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(CapturedRequest {
            url: request.url.to_string(),
            top: request.top,
            select: request.select.to_string(),
            api_key: request.api_key.expose_secret().to_string(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Response { status, body } => Ok(TransportResponse {
                status: *status,
                url: request.url.to_string(),
                body: body.clone(),
            }),
            Reply::Fail(reason) => Err(TransportError::Request(reason.clone())),
        }
    }
}

/// A `{"value": [...]}` payload with `count` complete records `SO-1..SO-count`.
pub fn sales_orders_body(count: usize) -> String {
    let records: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": format!("SO-{i}"),
                "displayId": format!("{}", 1000 + i),
                "soldToParty": format!("CUST-{i}"),
                "netAmount": format!("{}.00", 100 * i),
                "netAmountCurrency": "EUR",
                "createdAt": format!("2024-01-{:02}T09:00:00Z", i.min(28)),
            })
        })
        .collect();
    serde_json::json!({ "value": records }).to_string()
}
