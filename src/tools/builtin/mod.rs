//! Built-in tools.

mod sales_orders;

pub use sales_orders::SalesOrdersTool;
