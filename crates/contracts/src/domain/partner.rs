//! Business partner (BP) records: account balance and address book.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::normalize::{number_field, string_field};

const CARD_CODE: &[&str] = &["CardCode", "cardCode", "code"];
const CARD_NAME: &[&str] = &["CardName", "cardName", "name"];
const BALANCE: &[&str] = &["CurrentAccountBalance", "Balance", "balance"];
const CURRENCY: &[&str] = &["Currency", "currency"];

const ADDRESS_NAME: &[&str] = &["AddressName", "addressName", "name"];
const STREET: &[&str] = &["Street", "street", "AddressLine1"];
const CITY: &[&str] = &["City", "city"];
const ZIP_CODE: &[&str] = &["ZipCode", "zipCode", "postcode"];
const COUNTRY: &[&str] = &["Country", "country"];
const ADDRESS_TYPE: &[&str] = &["AddressType", "addressType", "type"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessPartner {
    pub card_code: String,
    pub card_name: String,
    pub balance: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressKind {
    BillTo,
    ShipTo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub kind: AddressKind,
}

impl PartnerAddress {
    /// Single-line rendering for dropdowns and detail views.
    pub fn display(&self) -> String {
        let parts: Vec<&str> = [
            self.street.as_str(),
            self.city.as_str(),
            self.zip_code.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
        if parts.is_empty() {
            self.name.clone()
        } else {
            parts.join(", ")
        }
    }
}

pub fn partner(record: &Value) -> BusinessPartner {
    BusinessPartner {
        card_code: string_field(record, CARD_CODE),
        card_name: string_field(record, CARD_NAME),
        balance: number_field(record, BALANCE),
        currency: string_field(record, CURRENCY),
    }
}

/// The ERP marks bill-to rows as `bo_BillTo`; everything else is treated
/// as a ship-to address.
pub fn address(record: &Value) -> PartnerAddress {
    let raw_kind = string_field(record, ADDRESS_TYPE);
    let kind = if raw_kind.eq_ignore_ascii_case("bo_billto") || raw_kind.eq_ignore_ascii_case("billto")
    {
        AddressKind::BillTo
    } else {
        AddressKind::ShipTo
    };
    PartnerAddress {
        name: string_field(record, ADDRESS_NAME),
        street: string_field(record, STREET),
        city: string_field(record, CITY),
        zip_code: string_field(record, ZIP_CODE),
        country: string_field(record, COUNTRY),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partner_balance_aliases() {
        let bp = partner(&json!({
            "CardCode": "C0001",
            "CardName": "Acme Sdn Bhd",
            "CurrentAccountBalance": "12,500.00"
        }));
        assert_eq!(bp.card_code, "C0001");
        assert_eq!(bp.balance, 12500.0);
    }

    #[test]
    fn test_address_kind_mapping() {
        let bill = address(&json!({ "AddressName": "HQ", "AddressType": "bo_BillTo" }));
        assert_eq!(bill.kind, AddressKind::BillTo);

        let ship = address(&json!({ "AddressName": "Warehouse", "AddressType": "bo_ShipTo" }));
        assert_eq!(ship.kind, AddressKind::ShipTo);

        let unknown = address(&json!({ "AddressName": "?" }));
        assert_eq!(unknown.kind, AddressKind::ShipTo);
    }

    #[test]
    fn test_address_display_skips_empty_parts() {
        let addr = address(&json!({
            "AddressName": "HQ", "Street": "1 Jalan Satu", "City": "Kuala Lumpur"
        }));
        assert_eq!(addr.display(), "1 Jalan Satu, Kuala Lumpur");
    }
}
