use contracts::domain::document::{LineItem, OrderRow};
use contracts::domain::normalize;

use crate::shared::api_utils::{get_json, get_records, try_begin};

pub async fn fetch_orders(token: &str) -> Result<Vec<OrderRow>, String> {
    let records = get_records("/api/sap/orders", token).await?;
    Ok(records.iter().map(normalize::order_row).collect())
}

/// Line items for one order, keyed by `doc_entry`.
///
/// Returns `Ok(None)` when an identical fetch is already in flight, so
/// rapid repeated opens of the same detail view do not race each other.
pub async fn fetch_order_lines(
    token: &str,
    doc_entry: i64,
) -> Result<Option<Vec<LineItem>>, String> {
    let key = format!("orders/{}", doc_entry);
    let Some(_guard) = try_begin(&key) else {
        return Ok(None);
    };

    let value: serde_json::Value =
        get_json(&format!("/api/sap/orders/{}", doc_entry), token).await?;
    let lines = normalize::line_records(value)
        .iter()
        .enumerate()
        .map(|(i, record)| normalize::line_item(record, i))
        .collect();
    Ok(Some(lines))
}
