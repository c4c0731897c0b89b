//! Error types for sales order fetches.
//!
//! The `Display` text of each variant is the exact message handed back to the
//! tool caller.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a sales order fetch can end in besides a list of orders.
#[derive(Debug, Error)]
pub enum SalesOrderError {
    /// No key from the call and none configured. No request is sent.
    #[error("Error: No API key provided and SAP_API_KEY environment variable not set")]
    MissingCredential,

    /// Upstream answered with a 4xx or 5xx status.
    #[error(
        "HTTP error occurred: {} for url: {url}\nResponse content: {body}",
        status_line(.status)
    )]
    HttpStatus {
        /// Status code returned by the API.
        status: StatusCode,
        /// URL the request was sent to.
        url: String,
        /// Raw response body, untouched.
        body: String,
    },

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("Error occurred during request: {0}")]
    Network(#[from] TransportError),

    /// Success status but no `value` records in the payload.
    #[error("No sales orders found or invalid response")]
    NoOrders,

    /// Anything else, such as a body that is not JSON.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SalesOrderError {
    /// Short machine-readable tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::HttpStatus { .. } => "http_status",
            Self::Network(_) => "network",
            Self::NoOrders => "no_orders",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

/// Errors raised by an [`HttpTransport`](super::HttpTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// `401 Client Error: Unauthorized` style status description.
fn status_line(status: &StatusCode) -> String {
    let class = if status.is_server_error() {
        "Server"
    } else {
        "Client"
    };
    match status.canonical_reason() {
        Some(reason) => format!("{} {class} Error: {reason}", status.as_u16()),
        None => format!("{} {class} Error", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_carries_body_verbatim() {
        let err = SalesOrderError::HttpStatus {
            status: StatusCode::UNAUTHORIZED,
            url: "https://example.com/SalesOrder".to_string(),
            body: r#"{"fault":{"faultstring":"Invalid ApiKey"}}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.starts_with(
            "HTTP error occurred: 401 Client Error: Unauthorized for url: https://example.com/SalesOrder"
        ));
        assert!(text.ends_with("\nResponse content: {\"fault\":{\"faultstring\":\"Invalid ApiKey\"}}"));
    }

    #[test]
    fn server_errors_are_labelled_as_such() {
        assert_eq!(
            status_line(&StatusCode::BAD_GATEWAY),
            "502 Server Error: Bad Gateway"
        );
    }

    #[test]
    fn network_error_wraps_transport_text() {
        let err: SalesOrderError = TransportError::Request("connection refused".into()).into();
        assert_eq!(err.to_string(), "Error occurred during request: connection refused");
        assert_eq!(err.kind(), "network");
    }
}
