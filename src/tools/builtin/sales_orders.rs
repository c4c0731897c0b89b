//! `get_sales_orders` tool.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use secrecy::SecretString;

use crate::sap::{SalesOrderClient, render_outcome};
use crate::tools::tool::{Tool, ToolError, ToolOutput, optional_str, optional_u64};

/// Retrieves recent sales orders from the SAP Graph sandbox.
///
/// Fetch failures (missing key, HTTP errors, network errors, odd payloads)
/// come back as descriptive text in an `Ok` output. Only malformed
/// parameters produce a [`ToolError`].
#[derive(Debug, Clone)]
pub struct SalesOrdersTool {
    client: SalesOrderClient,
}

impl SalesOrdersTool {
    pub fn new(client: SalesOrderClient) -> Self {
        Self { client }
    }

    fn top_param(&self, params: &serde_json::Value) -> Result<u32, ToolError> {
        match optional_u64(params, "top")? {
            None => Ok(self.client.default_top()),
            Some(0) => Err(ToolError::InvalidParameters(
                "'top' must be a positive integer".to_string(),
            )),
            Some(n) => u32::try_from(n).map_err(|_| {
                ToolError::InvalidParameters(format!("'top' is too large: {n}"))
            }),
        }
    }
}

#[async_trait]
impl Tool for SalesOrdersTool {
    fn name(&self) -> &str {
        "get_sales_orders"
    }

    fn description(&self) -> &str {
        "Retrieve sales orders from the SAP Graph API sandbox. Returns each order's ID, \
         display ID, sold-to party, net amount with currency, and creation time as text."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "top": {
                    "type": "integer",
                    "minimum": 1,
                    "default": self.client.default_top(),
                    "description": format!(
                        "Number of sales orders to retrieve (default: {})",
                        self.client.default_top()
                    )
                },
                "api_key": {
                    "type": "string",
                    "description": "SAP API key (optional, falls back to the SAP_API_KEY environment variable)"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let start = Instant::now();

        let top = self.top_param(&params)?;
        let api_key = optional_str(&params, "api_key")?
            .filter(|k| !k.is_empty())
            .map(|k| SecretString::from(k.to_string()));

        let outcome = self.client.fetch(top, api_key.as_ref()).await;
        if let Err(ref e) = outcome {
            tracing::debug!(kind = e.kind(), "get_sales_orders finished without records");
        }

        Ok(ToolOutput::text(render_outcome(&outcome), start.elapsed()))
    }

    /// Bounded only by the HTTP client, so a slow upstream still yields text.
    fn execution_timeout(&self) -> Option<Duration> {
        None
    }
}
