//! Canonical row shapes for sales orders and invoices.
//!
//! The ERP API returns loosely shaped records with inconsistent field names
//! across endpoints; `normalize` maps them onto these types so the rest of
//! the portal only ever sees one shape.

use serde::{Deserialize, Serialize};

/// Canonical document status vocabulary.
///
/// The backend sends free text (`"Open"`, `"Closed"`, `"Delivered"`,
/// `"In Transit"`, ...). Parsing folds the known spellings onto three
/// variants; anything else is carried through as `Other` so no row is ever
/// dropped because of an unexpected status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocStatus {
    Open,
    InTransit,
    Closed,
    Other(String),
}

impl DocStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "open" | "o" | "bost_open" => DocStatus::Open,
            "in transit" | "intransit" | "in_transit" => DocStatus::InTransit,
            "closed" | "c" | "bost_close" | "delivered" => DocStatus::Closed,
            "" => DocStatus::Other(String::new()),
            _ => DocStatus::Other(raw.trim().to_string()),
        }
    }

    /// Display label. This is the single place where the customer-facing
    /// wording is defined; closed documents render as "Delivered".
    pub fn label(&self) -> &str {
        match self {
            DocStatus::Open => "Open",
            DocStatus::InTransit => "In Transit",
            DocStatus::Closed => "Delivered",
            DocStatus::Other(raw) if raw.is_empty() => "—",
            DocStatus::Other(raw) => raw,
        }
    }

    /// Stable key used by the status filter dropdown.
    pub fn key(&self) -> String {
        match self {
            DocStatus::Open => "open".to_string(),
            DocStatus::InTransit => "in_transit".to_string(),
            DocStatus::Closed => "closed".to_string(),
            DocStatus::Other(raw) => raw.to_lowercase(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DocStatus::Open)
    }
}

impl From<String> for DocStatus {
    fn from(raw: String) -> Self {
        DocStatus::parse(&raw)
    }
}

impl From<DocStatus> for String {
    fn from(status: DocStatus) -> Self {
        status.label().to_string()
    }
}

/// One sales order as shown in the Orders list.
///
/// `doc_entry` is the backend primary key and the only stable handle for
/// detail lookups; `id` is the human-facing document number, which may
/// collide across document types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRow {
    pub doc_entry: i64,
    pub id: String,
    pub po_no: String,
    pub customer: String,
    pub customer_code: String,
    pub order_date: String,
    pub due_date: String,
    pub total: f64,
    pub currency: String,
    pub status: DocStatus,
    pub download: String,
}

/// One A/R invoice as shown in the Invoices list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub doc_entry: i64,
    pub id: String,
    pub po_no: String,
    pub customer: String,
    pub customer_code: String,
    pub order_date: String,
    pub due_date: String,
    pub total: f64,
    pub paid_to_date: f64,
    /// Always `max(0, total - paid_to_date)`.
    pub remaining: f64,
    pub discount: f64,
    pub vat: f64,
    pub currency: String,
    pub status: DocStatus,
    pub bill_to: String,
    pub ship_to: String,
    pub download: String,
    /// Line items, fetched lazily when the detail view opens.
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

/// One line within an order/invoice detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based position within the document.
    pub no: usize,
    pub item_code: String,
    pub description: String,
    pub qty: f64,
    pub price: f64,
}

impl LineItem {
    pub fn total(&self) -> f64 {
        self.qty * self.price
    }
}

/// A document carrying an amount the customer still owes.
///
/// Implemented by both row types so the due-window classifier can treat
/// them uniformly: for invoices the outstanding amount is the unpaid
/// remainder, for orders it is the full document total.
pub trait Receivable {
    fn status(&self) -> &DocStatus;
    fn due_date(&self) -> &str;
    fn outstanding(&self) -> f64;
}

impl Receivable for OrderRow {
    fn status(&self) -> &DocStatus {
        &self.status
    }
    fn due_date(&self) -> &str {
        &self.due_date
    }
    fn outstanding(&self) -> f64 {
        self.total
    }
}

impl Receivable for InvoiceRow {
    fn status(&self) -> &DocStatus {
        &self.status
    }
    fn due_date(&self) -> &str {
        &self.due_date
    }
    fn outstanding(&self) -> f64 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(DocStatus::parse("Open"), DocStatus::Open);
        assert_eq!(DocStatus::parse("open"), DocStatus::Open);
        assert_eq!(DocStatus::parse("Closed"), DocStatus::Closed);
        assert_eq!(DocStatus::parse("Delivered"), DocStatus::Closed);
        assert_eq!(DocStatus::parse("In Transit"), DocStatus::InTransit);
        assert_eq!(
            DocStatus::parse("Cancelled"),
            DocStatus::Other("Cancelled".to_string())
        );
    }

    #[test]
    fn test_closed_displays_as_delivered() {
        assert_eq!(DocStatus::Closed.label(), "Delivered");
        assert_eq!(DocStatus::parse("Delivered"), DocStatus::parse("Closed"));
    }

    #[test]
    fn test_line_total() {
        let line = LineItem {
            no: 1,
            item_code: "A100".to_string(),
            description: "Widget".to_string(),
            qty: 3.0,
            price: 12.5,
        };
        assert_eq!(line.total(), 37.5);
    }
}
