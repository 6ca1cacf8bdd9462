use contracts::domain::item::{self, ItemInfo};
use contracts::domain::normalize;

use crate::shared::api_utils::get_json;

/// Item-master lookup used by the order entry form to fill description,
/// unit price and weight from a typed item code.
pub async fn fetch_item(token: &str, item_code: &str) -> Result<ItemInfo, String> {
    let path = format!("/api/sap/items/{}", urlencoding::encode(item_code));
    let value: serde_json::Value = get_json(&path, token).await?;
    Ok(item::item(&normalize::record(value)))
}
