//! Text rendering for sales order results.

use std::fmt::Write;

use super::error::SalesOrderError;
use super::model::SalesOrder;

/// Rendered in place of a missing field.
pub const PLACEHOLDER: &str = "N/A";

const SEPARATOR_WIDTH: usize = 40;

/// Render a fetch result as the text returned to the tool caller.
pub fn render_outcome(outcome: &Result<Vec<SalesOrder>, SalesOrderError>) -> String {
    match outcome {
        Ok(orders) if orders.is_empty() => SalesOrderError::NoOrders.to_string(),
        Ok(orders) => render_orders(orders),
        Err(e) => e.to_string(),
    }
}

/// Render a header line followed by one block per order.
pub fn render_orders(orders: &[SalesOrder]) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = format!("Found {} sales orders:\n\n", orders.len());

    for order in orders {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Order ID: {}", field(&order.id));
        let _ = writeln!(out, "Display ID: {}", field(&order.display_id));
        let _ = writeln!(out, "Sold To Party: {}", field(&order.sold_to_party));
        let _ = writeln!(
            out,
            "Net Amount: {} {}",
            field(&order.net_amount),
            field(&order.net_amount_currency)
        );
        let _ = writeln!(out, "Created At: {}", field(&order.created_at));
        out.push_str(&separator);
        out.push('\n');
    }

    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}
