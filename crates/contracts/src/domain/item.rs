//! Item master lookups used by the order entry form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::normalize::{number_field, string_field};

const ITEM_CODE: &[&str] = &["ItemCode", "itemCode", "code"];
const ITEM_NAME: &[&str] = &["ItemName", "itemName", "name", "description"];
const PRICE: &[&str] = &["Price", "price", "unitPrice"];
const WEIGHT: &[&str] = &["Weight", "weight", "SWeight1"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInfo {
    pub item_code: String,
    pub item_name: String,
    pub price: f64,
    /// Unit weight in kg, 0 when the master record carries none.
    pub weight: f64,
}

pub fn item(record: &Value) -> ItemInfo {
    ItemInfo {
        item_code: string_field(record, ITEM_CODE),
        item_name: string_field(record, ITEM_NAME),
        price: number_field(record, PRICE),
        weight: number_field(record, WEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_lookup_shape() {
        let info = item(&json!({
            "ItemCode": "A100",
            "ItemName": "Cement 50kg",
            "Price": "45.00",
            "Weight": 50
        }));
        assert_eq!(info.item_code, "A100");
        assert_eq!(info.price, 45.0);
        assert_eq!(info.weight, 50.0);
    }
}
