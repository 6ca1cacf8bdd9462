use contracts::domain::document::{InvoiceRow, LineItem};
use contracts::domain::normalize;

use crate::shared::api_utils::{get_json, get_records, try_begin};

pub async fn fetch_invoices(token: &str) -> Result<Vec<InvoiceRow>, String> {
    let records = get_records("/api/sap/invoices", token).await?;
    Ok(records.iter().map(normalize::invoice_row).collect())
}

/// Line items for one invoice. `Ok(None)` means the same fetch is already
/// running; the caller treats that as a no-op.
pub async fn fetch_invoice_lines(
    token: &str,
    doc_entry: i64,
) -> Result<Option<Vec<LineItem>>, String> {
    let key = format!("invoices/{}", doc_entry);
    let Some(_guard) = try_begin(&key) else {
        return Ok(None);
    };

    let value: serde_json::Value =
        get_json(&format!("/api/sap/invoices/{}/details", doc_entry), token).await?;
    let lines = normalize::line_records(value)
        .iter()
        .enumerate()
        .map(|(i, record)| normalize::line_item(record, i))
        .collect();
    Ok(Some(lines))
}
