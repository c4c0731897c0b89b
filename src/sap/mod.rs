//! SAP Graph sales order access.
//!
//! One round trip per call:
//!
//! ```text
//! credential ──▶ OrderRequest ──▶ HttpTransport::get ──▶ status check
//!                                                           │
//!                        render_outcome ◀── SalesOrderPage::parse
//! ```
//!
//! [`SalesOrderClient::fetch`] returns structured results; turning them into
//! text is left to [`render_outcome`], which the tool boundary calls.

mod client;
mod error;
mod format;
mod model;
mod transport;

pub use client::SalesOrderClient;
pub use error::{SalesOrderError, TransportError};
pub use format::{PLACEHOLDER, render_orders, render_outcome};
pub use model::{SELECT_FIELDS, SalesOrder, SalesOrderPage};
pub use transport::{HttpTransport, OrderRequest, ReqwestTransport, TransportResponse};
