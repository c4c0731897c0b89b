//! Configuration resolved from environment variables.
//!
//! `main` calls `dotenvy::dotenv()` first, so a `.env` file in the working
//! directory is honored. Environment lookups happen only here, once, at
//! startup; everything downstream receives typed values.

mod helpers;
mod sap;

pub use sap::{DEFAULT_ENDPOINT, SapConfig};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub sap: SapConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sap: SapConfig::resolve()?,
        })
    }
}
