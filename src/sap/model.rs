//! Sales order payload types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::SalesOrderError;

/// Fields requested through `$select`, in the order the API documents them.
pub const SELECT_FIELDS: &str = "id,displayId,soldToParty,netAmount,netAmountCurrency,createdAt";

/// One sales order as returned by the API.
///
/// Fields are passed through verbatim. Scalars that are not strings (a
/// numeric `netAmount`, say) keep their JSON text; `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sold_to_party: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub net_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub net_amount_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// The `{"value": [...]}` envelope around a list of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesOrderPage {
    pub orders: Vec<SalesOrder>,
}

impl SalesOrderPage {
    /// Parse a response body.
    ///
    /// A missing, non-array or empty `value` yields [`SalesOrderError::NoOrders`],
    /// so `{"value": null}` reads as "no orders" rather than a parse failure.
    /// A body that is not JSON, or a record that is not an object, yields
    /// [`SalesOrderError::Unexpected`].
    pub fn parse(body: &str) -> Result<Self, SalesOrderError> {
        let payload: Value = serde_json::from_str(body).map_err(|e| {
            SalesOrderError::Unexpected(format!("response body is not valid JSON: {e}"))
        })?;

        let records = match payload.get("value").and_then(Value::as_array) {
            Some(records) if !records.is_empty() => records,
            _ => return Err(SalesOrderError::NoOrders),
        };

        let orders = records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                SalesOrder::deserialize(record).map_err(|e| {
                    SalesOrderError::Unexpected(format!("malformed sales order at index {idx}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { orders })
    }
}
