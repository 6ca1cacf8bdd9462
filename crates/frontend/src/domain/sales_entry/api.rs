use contracts::domain::normalize;
use contracts::domain::sales_entry::SalesOrderDraft;

use crate::shared::api_utils::{post_json, try_begin};

/// Submit a sales order. Returns the document number assigned by the ERP.
///
/// The in-flight guard is keyed by the draft's `client_ref`, so a double
/// click on the submit button cannot create the order twice.
pub async fn submit_order(token: &str, draft: &SalesOrderDraft) -> Result<String, String> {
    let key = format!("sales-orders/{}", draft.client_ref);
    let Some(_guard) = try_begin(&key) else {
        return Err("Submission already in progress".to_string());
    };

    let value: serde_json::Value = post_json("/api/sap/sales-orders", token, draft).await?;
    let record = normalize::record(value);
    let doc_num = normalize::string_field(&record, &["DocNum", "docNum", "id"]);
    Ok(doc_num)
}
