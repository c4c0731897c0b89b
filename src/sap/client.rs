use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use super::error::SalesOrderError;
use super::model::{SELECT_FIELDS, SalesOrder, SalesOrderPage};
use super::transport::{HttpTransport, OrderRequest};
use crate::config::SapConfig;

/// Fetches sales orders from the SAP Graph API.
///
/// Holds only immutable configuration and a shared transport, so one client
/// can serve concurrent calls.
#[derive(Clone)]
pub struct SalesOrderClient {
    config: SapConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SalesOrderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesOrderClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SalesOrderClient {
    pub fn new(config: SapConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Page size used when the caller does not ask for a specific one.
    pub fn default_top(&self) -> u32 {
        self.config.default_top
    }

    /// Fetch up to `top` orders.
    ///
    /// `api_key` wins over the configured key. Without either, this returns
    /// [`SalesOrderError::MissingCredential`] before touching the network.
    pub async fn fetch(
        &self,
        top: u32,
        api_key: Option<&SecretString>,
    ) -> Result<Vec<SalesOrder>, SalesOrderError> {
        let api_key = api_key
            .filter(|k| !k.expose_secret().is_empty())
            .or(self.config.api_key.as_ref())
            .filter(|k| !k.expose_secret().is_empty())
            .ok_or(SalesOrderError::MissingCredential)?;

        let request = OrderRequest {
            url: &self.config.endpoint,
            top,
            select: SELECT_FIELDS,
            api_key,
        };

        tracing::debug!(url = %request.url, top, "Requesting sales orders");

        let response = self.transport.get(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "Sales order request failed");
            SalesOrderError::from(e)
        })?;

        if response.status.is_client_error() || response.status.is_server_error() {
            tracing::warn!(
                status = response.status.as_u16(),
                url = %response.url,
                "SAP API returned error status"
            );
            return Err(SalesOrderError::HttpStatus {
                status: response.status,
                url: response.url,
                body: response.body,
            });
        }

        let page = SalesOrderPage::parse(&response.body).inspect_err(|e| {
            tracing::info!(kind = e.kind(), "Sales order response yielded no records");
        })?;

        tracing::info!(count = page.orders.len(), "Fetched sales orders");
        Ok(page.orders)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::testing::{StubTransport, sales_orders_body};

    fn client_with(stub: &Arc<StubTransport>, config: SapConfig) -> SalesOrderClient {
        SalesOrderClient::new(config, stub.clone())
    }

    #[tokio::test]
    async fn missing_credential_sends_nothing() {
        let stub = Arc::new(StubTransport::ok(sales_orders_body(2)));
        let client = client_with(&stub, SapConfig::default());

        let err = client.fetch(3, None).await.unwrap_err();

        assert!(matches!(err, SalesOrderError::MissingCredential));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn empty_call_key_counts_as_missing() {
        let stub = Arc::new(StubTransport::ok(sales_orders_body(1)));
        let client = client_with(&stub, SapConfig::default());
        let empty = SecretString::from(String::new());

        let err = client.fetch(3, Some(&empty)).await.unwrap_err();

        assert!(matches!(err, SalesOrderError::MissingCredential));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn call_key_overrides_configured_key() {
        let stub = Arc::new(StubTransport::ok(sales_orders_body(1)));
        let client = client_with(&stub, SapConfig::default().with_api_key("from-env"));
        let key = SecretString::from("from-call".to_string());

        client.fetch(5, Some(&key)).await.unwrap();

        let seen = stub.last_request().unwrap();
        assert_eq!(seen.api_key, "from-call");
        assert_eq!(seen.top, 5);
        assert_eq!(seen.select, SELECT_FIELDS);
    }

    #[tokio::test]
    async fn falls_back_to_configured_key() {
        let stub = Arc::new(StubTransport::ok(sales_orders_body(1)));
        let client = client_with(&stub, SapConfig::default().with_api_key("from-env"));

        client.fetch(3, None).await.unwrap();

        assert_eq!(stub.last_request().unwrap().api_key, "from-env");
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn error_status_keeps_raw_body() {
        let stub = Arc::new(StubTransport::with_status(
            StatusCode::FORBIDDEN,
            "Access denied for this API product",
        ));
        let client = client_with(&stub, SapConfig::default().with_api_key("k"));

        match client.fetch(3, None).await.unwrap_err() {
            SalesOrderError::HttpStatus { status, body, .. } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "Access denied for this API product");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_maps_to_network() {
        let stub = Arc::new(StubTransport::failing("dns error: no such host"));
        let client = client_with(&stub, SapConfig::default().with_api_key("k"));

        let err = client.fetch(3, None).await.unwrap_err();

        assert!(matches!(err, SalesOrderError::Network(_)));
        assert!(err.to_string().contains("no such host"));
    }

    #[tokio::test]
    async fn returns_records_in_order() {
        let stub = Arc::new(StubTransport::ok(sales_orders_body(3)));
        let client = client_with(&stub, SapConfig::default().with_api_key("k"));

        let orders = client.fetch(3, None).await.unwrap();

        let ids: Vec<_> = orders.iter().filter_map(|o| o.id.clone()).collect();
        assert_eq!(ids, ["SO-1", "SO-2", "SO-3"]);
    }
}
