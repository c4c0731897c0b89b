//! Error types shared across the crate.
//!
//! Fetch outcomes have their own taxonomy in [`crate::sap::SalesOrderError`];
//! tool-protocol failures live in [`crate::tools::ToolError`].

use thiserror::Error;

/// Configuration errors raised while resolving [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
