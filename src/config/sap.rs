use secrecy::SecretString;

use crate::config::helpers::{optional_env, parse_positive};
use crate::error::ConfigError;

/// Base URL of the SAP Graph sandbox.
const DEFAULT_BASE_URL: &str = "https://sandbox.api.sap.com/sapgraph";

/// Path of the sales order entity set, relative to the base URL.
const SALES_ORDER_PATH: &str = "sap.graph/SalesOrder";

/// Fully qualified sales order endpoint for the default base URL.
pub const DEFAULT_ENDPOINT: &str = "https://sandbox.api.sap.com/sapgraph/sap.graph/SalesOrder";

/// Number of orders fetched when the caller does not pass `top`.
const DEFAULT_TOP: u32 = 3;

/// SAP Graph API configuration.
#[derive(Clone)]
pub struct SapConfig {
    /// Fallback API key, used when a call does not carry its own.
    pub api_key: Option<SecretString>,
    /// Sales order endpoint URL.
    pub endpoint: String,
    /// Page size used when `top` is omitted.
    pub default_top: u32,
}

impl std::fmt::Debug for SapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SapConfig")
            .field("api_key", &self.api_key.is_some())
            .field("endpoint", &self.endpoint)
            .field("default_top", &self.default_top)
            .finish()
    }
}

impl Default for SapConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: format!("{DEFAULT_BASE_URL}/{SALES_ORDER_PATH}"),
            default_top: DEFAULT_TOP,
        }
    }
}

impl SapConfig {
    /// Resolve from `SAP_API_KEY`, `SAP_API_BASE_URL` and `SAP_DEFAULT_TOP`.
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        Self::resolve_with(optional_env)
    }

    fn resolve_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let defaults = Self::default();

        let api_key = lookup("SAP_API_KEY")?.map(SecretString::from);

        let endpoint = match lookup("SAP_API_BASE_URL")? {
            Some(base) => endpoint_for(&base)?,
            None => defaults.endpoint,
        };

        let default_top = match lookup("SAP_DEFAULT_TOP")? {
            Some(raw) => parse_positive("SAP_DEFAULT_TOP", &raw)?,
            None => defaults.default_top,
        };

        Ok(Self {
            api_key,
            endpoint,
            default_top,
        })
    }

    /// Replace the fallback key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Point the client at a different base URL (a local stub, for instance).
    pub fn with_base_url(mut self, base: &str) -> Result<Self, ConfigError> {
        self.endpoint = endpoint_for(base)?;
        Ok(self)
    }
}

/// Build the sales order endpoint from a base URL.
fn endpoint_for(base: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: "SAP_API_BASE_URL".to_string(),
        message,
    };

    let parsed = reqwest::Url::parse(base.trim()).map_err(|e| invalid(format!("{e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme must be http or https, got '{}'",
            parsed.scheme()
        )));
    }
    if parsed.query().is_some() {
        return Err(invalid("must not carry a query string".to_string()));
    }

    let base = parsed.as_str().trim_end_matches('/');
    Ok(format!("{base}/{SALES_ORDER_PATH}"))
}
