//! Payload normalization: loose ERP records -> canonical rows.
//!
//! The backend's field names differ between endpoints and versions
//! (`DocTotal` vs `total`, `DocDueDate` vs `dueDate`, ...). Each canonical
//! field has an explicit alias list resolved in priority order, so the
//! tolerance for the backend's shape lives here and nowhere else. Every
//! function in this module is total: missing or malformed fields fall back
//! to `""`, `0` or `"#"` instead of failing.

use serde_json::Value;

use super::document::{DocStatus, InvoiceRow, LineItem, OrderRow};

// Alias tables, canonical field -> source fields in priority order.
const DOC_ENTRY: &[&str] = &["DocEntry", "docEntry", "doc_entry"];
const DOC_NUM: &[&str] = &["DocNum", "docNum", "SalesNo", "salesNo", "id"];
const PO_NO: &[&str] = &["NumAtCard", "numAtCard", "PoNo", "poNo", "po_no"];
const CUSTOMER: &[&str] = &["CardName", "cardName", "customer"];
const CUSTOMER_CODE: &[&str] = &["CardCode", "cardCode", "customerCode"];
const ORDER_DATE: &[&str] = &["DocDate", "docDate", "orderDate", "order_date"];
const DUE_DATE: &[&str] = &["DocDueDate", "docDueDate", "dueDate", "due_date"];
const TOTAL: &[&str] = &["DocTotal", "docTotal", "total"];
const CURRENCY: &[&str] = &["DocCurrency", "docCurrency", "currency"];
const STATUS: &[&str] = &["DocumentStatus", "DocStatus", "docStatus", "status"];
const PAID_TO_DATE: &[&str] = &["PaidToDate", "paidToDate", "paid"];
const DISCOUNT: &[&str] = &["DiscountPercent", "discPrcnt", "discount"];
const VAT: &[&str] = &["VatSum", "vatSum", "vat"];
const BILL_TO: &[&str] = &["Address", "billTo", "bill_to"];
const SHIP_TO: &[&str] = &["Address2", "shipTo", "ship_to"];
const DOWNLOAD: &[&str] = &["download", "downloadUrl", "attachmentUrl"];

const LINE_ITEM_CODE: &[&str] = &["ItemCode", "itemCode"];
const LINE_DESCRIPTION: &[&str] = &["ItemDescription", "Dscription", "itemName", "description"];
const LINE_QTY: &[&str] = &["Quantity", "quantity", "qty"];
const LINE_PRICE: &[&str] = &["Price", "price", "unitPrice"];

/// Unwrap a list response. The API usually answers `{ "data": [...] }`,
/// some endpoints return a bare array.
pub fn records(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(obj)) => vec![Value::Object(obj)],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Unwrap a single-record response: `{ "data": {...} }`, `{ "data": [row] }`
/// or a bare object.
pub fn record(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(mut items)) => {
                items.drain(..).next().unwrap_or(Value::Null)
            }
            Some(Value::Object(obj)) => Value::Object(obj),
            _ => Value::Object(map),
        },
        Value::Array(mut items) => items.drain(..).next().unwrap_or(Value::Null),
        other => other,
    }
}

const LINE_ARRAYS: &[&str] = &["DocumentLines", "documentLines", "items", "lines"];

/// Extract the line array from a detail response. Detail endpoints answer
/// with the line list directly, with the whole document carrying its lines
/// under one of the known keys, or with either of those inside the usual
/// envelope.
pub fn line_records(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if let Some(inner @ (Value::Array(_) | Value::Object(_))) = map.remove("data") {
                return line_records(inner);
            }
            for alias in LINE_ARRAYS {
                if let Some(Value::Array(items)) = map.remove(*alias) {
                    return items;
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// First present, non-null alias as a string. Numbers are rendered with
/// `to_string` so numeric document numbers still display.
pub fn string_field(record: &Value, aliases: &[&str]) -> String {
    for alias in aliases {
        match record.get(alias) {
            Some(Value::String(s)) => return s.trim().to_string(),
            Some(Value::Number(n)) => return n.to_string(),
            Some(Value::Null) | None => continue,
            Some(other) => return other.to_string(),
        }
    }
    String::new()
}

/// First present alias coerced to a number via [`parse_amount`].
pub fn number_field(record: &Value, aliases: &[&str]) -> f64 {
    for alias in aliases {
        match record.get(alias) {
            Some(Value::Null) | None => continue,
            Some(value) => return parse_amount(value),
        }
    }
    0.0
}

fn integer_field(record: &Value, aliases: &[&str]) -> i64 {
    number_field(record, aliases) as i64
}

fn link_field(record: &Value, aliases: &[&str]) -> String {
    let link = string_field(record, aliases);
    if link.is_empty() {
        "#".to_string()
    } else {
        link
    }
}

/// Coerce a JSON value to a number, stripping currency symbols and
/// thousands separators from strings. Defaults to 0 on failure.
pub fn parse_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Normalize one sales-order record.
pub fn order_row(record: &Value) -> OrderRow {
    OrderRow {
        doc_entry: integer_field(record, DOC_ENTRY),
        id: string_field(record, DOC_NUM),
        po_no: string_field(record, PO_NO),
        customer: string_field(record, CUSTOMER),
        customer_code: string_field(record, CUSTOMER_CODE),
        order_date: string_field(record, ORDER_DATE),
        due_date: string_field(record, DUE_DATE),
        total: number_field(record, TOTAL),
        currency: string_field(record, CURRENCY),
        status: DocStatus::parse(&string_field(record, STATUS)),
        download: link_field(record, DOWNLOAD),
    }
}

/// Normalize one invoice record. `remaining` is derived here and is never
/// negative, whatever the backend reports for paid-to-date.
pub fn invoice_row(record: &Value) -> InvoiceRow {
    let total = number_field(record, TOTAL);
    let paid_to_date = number_field(record, PAID_TO_DATE);
    InvoiceRow {
        doc_entry: integer_field(record, DOC_ENTRY),
        id: string_field(record, DOC_NUM),
        po_no: string_field(record, PO_NO),
        customer: string_field(record, CUSTOMER),
        customer_code: string_field(record, CUSTOMER_CODE),
        order_date: string_field(record, ORDER_DATE),
        due_date: string_field(record, DUE_DATE),
        total,
        paid_to_date,
        remaining: (total - paid_to_date).max(0.0),
        discount: number_field(record, DISCOUNT),
        vat: number_field(record, VAT),
        currency: string_field(record, CURRENCY),
        status: DocStatus::parse(&string_field(record, STATUS)),
        bill_to: string_field(record, BILL_TO),
        ship_to: string_field(record, SHIP_TO),
        download: link_field(record, DOWNLOAD),
        items: None,
    }
}

/// Normalize one detail line. `index` is the 0-based position in the
/// response; the row number shown to the user is 1-based.
pub fn line_item(record: &Value, index: usize) -> LineItem {
    LineItem {
        no: index + 1,
        item_code: string_field(record, LINE_ITEM_CODE),
        description: string_field(record, LINE_DESCRIPTION),
        qty: number_field(record, LINE_QTY),
        price: number_field(record, LINE_PRICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_and_bare_array() {
        let envelope = json!({ "data": [ { "DocNum": 1 }, { "DocNum": 2 } ] });
        assert_eq!(records(envelope).len(), 2);

        let bare = json!([ { "DocNum": 1 } ]);
        assert_eq!(records(bare).len(), 1);

        assert!(records(json!({ "message": "ok" })).is_empty());
        assert!(records(json!(null)).is_empty());
    }

    #[test]
    fn test_single_record_unwrap() {
        let wrapped = record(json!({ "data": { "DocNum": "1002" } }));
        assert_eq!(string_field(&wrapped, DOC_NUM), "1002");

        let listed = record(json!({ "data": [ { "DocNum": "1002" } ] }));
        assert_eq!(string_field(&listed, DOC_NUM), "1002");

        let bare = record(json!({ "DocNum": "1002" }));
        assert_eq!(string_field(&bare, DOC_NUM), "1002");
    }

    #[test]
    fn test_line_records_shapes() {
        let bare = json!([ { "ItemCode": "A" }, { "ItemCode": "B" } ]);
        assert_eq!(line_records(bare).len(), 2);

        let nested = json!({ "data": { "DocNum": "1", "DocumentLines": [ { "ItemCode": "A" } ] } });
        assert_eq!(line_records(nested).len(), 1);

        let enveloped = json!({ "data": [ { "ItemCode": "A" } ] });
        assert_eq!(line_records(enveloped).len(), 1);

        assert!(line_records(json!({ "message": "ok" })).is_empty());
    }

    #[test]
    fn test_alias_priority() {
        // Both spellings present: the earlier alias wins.
        let record = json!({ "DocTotal": 100.0, "total": 50.0 });
        assert_eq!(number_field(&record, TOTAL), 100.0);

        let record = json!({ "total": 50.0 });
        assert_eq!(number_field(&record, TOTAL), 50.0);
    }

    #[test]
    fn test_parse_amount_tolerance() {
        assert_eq!(parse_amount(&json!(1234.5)), 1234.5);
        assert_eq!(parse_amount(&json!("1234.50")), 1234.5);
        assert_eq!(parse_amount(&json!("RM 1,234.50")), 1234.5);
        assert_eq!(parse_amount(&json!("-42")), -42.0);
        assert_eq!(parse_amount(&json!("n/a")), 0.0);
        assert_eq!(parse_amount(&json!(null)), 0.0);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let row = order_row(&json!({}));
        assert_eq!(row.doc_entry, 0);
        assert_eq!(row.id, "");
        assert_eq!(row.total, 0.0);
        assert_eq!(row.download, "#");
    }

    #[test]
    fn test_order_row_mixed_spellings() {
        let record = json!({
            "docEntry": 77,
            "DocNum": "1002",
            "numAtCard": "PO-9",
            "CardName": "Acme Sdn Bhd",
            "cardCode": "C0001",
            "DocDate": "2024/01/05",
            "dueDate": "2024-02-05",
            "DocTotal": "1,500.00",
            "currency": "MYR",
            "status": "Open"
        });
        let row = order_row(&record);
        assert_eq!(row.doc_entry, 77);
        assert_eq!(row.id, "1002");
        assert_eq!(row.po_no, "PO-9");
        assert_eq!(row.customer, "Acme Sdn Bhd");
        assert_eq!(row.total, 1500.0);
        assert_eq!(row.status, DocStatus::Open);
    }

    #[test]
    fn test_invoice_remaining_never_negative() {
        let overpaid = invoice_row(&json!({ "DocTotal": 100.0, "PaidToDate": 140.0 }));
        assert_eq!(overpaid.remaining, 0.0);

        let partial = invoice_row(&json!({ "DocTotal": 100.0, "PaidToDate": 40.0 }));
        assert_eq!(partial.remaining, 60.0);

        let unpaid = invoice_row(&json!({ "DocTotal": 80.0 }));
        assert_eq!(unpaid.remaining, 80.0);
    }

    #[test]
    fn test_line_item_numbering() {
        let line = line_item(&json!({ "ItemCode": "A100", "Quantity": 2, "Price": 9.5 }), 0);
        assert_eq!(line.no, 1);
        assert_eq!(line.total(), 19.0);
    }
}
