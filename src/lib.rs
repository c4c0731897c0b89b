//! saptools - an agent tool for the SAP Graph API sandbox.
//!
//! Exposes a single tool, `get_sales_orders`, that fetches recent sales orders
//! and renders them as a human-readable text block. The tool is hosted through
//! [`tools::ToolRegistry`]; the HTTP call itself lives in [`sap`] behind the
//! [`sap::HttpTransport`] seam so tests can substitute a stub.

pub mod cli;
pub mod config;
pub mod error;
pub mod sap;
pub mod testing;
pub mod tools;
