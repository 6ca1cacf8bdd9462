//! Sales-order draft: the payload built by the order entry form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::parse_flex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftLine {
    pub item_code: String,
    pub description: String,
    pub qty: f64,
    pub price: f64,
}

impl DraftLine {
    pub fn total(&self) -> f64 {
        self.qty * self.price
    }
}

/// A sales order as submitted to `POST /api/sap/sales-orders`.
///
/// `client_ref` is generated when the draft is created so a resubmission of
/// the same form can be recognized server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrderDraft {
    pub client_ref: Uuid,
    pub customer_code: String,
    pub po_no: String,
    pub due_date: String,
    pub bill_to: String,
    pub ship_to: String,
    pub comments: String,
    pub lines: Vec<DraftLine>,
}

impl SalesOrderDraft {
    pub fn new(customer_code: &str) -> Self {
        Self {
            client_ref: Uuid::new_v4(),
            customer_code: customer_code.to_string(),
            po_no: String::new(),
            due_date: String::new(),
            bill_to: String::new(),
            ship_to: String::new(),
            comments: String::new(),
            lines: Vec::new(),
        }
    }

    pub fn order_total(&self) -> f64 {
        self.lines.iter().map(|l| l.total()).sum()
    }

    /// Client-side validation run before submission. Mirrors what the
    /// backend rejects, so most bad input never leaves the browser.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_code.is_empty() {
            return Err("No customer account is associated with this session".to_string());
        }
        if self.lines.is_empty() {
            return Err("Add at least one line to the order".to_string());
        }
        for (i, line) in self.lines.iter().enumerate() {
            if line.item_code.trim().is_empty() {
                return Err(format!("Line {}: item code is required", i + 1));
            }
            if line.qty <= 0.0 {
                return Err(format!("Line {}: quantity must be greater than zero", i + 1));
            }
        }
        if parse_flex(&self.due_date).is_none() {
            return Err("Requested delivery date is missing or invalid".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_line() -> SalesOrderDraft {
        let mut draft = SalesOrderDraft::new("C0001");
        draft.due_date = "2024-07-01".to_string();
        draft.lines.push(DraftLine {
            item_code: "A100".to_string(),
            description: "Cement 50kg".to_string(),
            qty: 2.0,
            price: 45.0,
        });
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft_with_line().validate().is_ok());
    }

    #[test]
    fn test_empty_lines_rejected() {
        let mut draft = draft_with_line();
        draft.lines.clear();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_zero_qty_rejected() {
        let mut draft = draft_with_line();
        draft.lines[0].qty = 0.0;
        let err = draft.validate().unwrap_err();
        assert!(err.contains("Line 1"));
    }

    #[test]
    fn test_bad_due_date_rejected() {
        let mut draft = draft_with_line();
        draft.due_date = "tomorrow".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_order_total_sums_lines() {
        let mut draft = draft_with_line();
        draft.lines.push(DraftLine {
            item_code: "B200".to_string(),
            description: String::new(),
            qty: 1.0,
            price: 10.0,
        });
        assert_eq!(draft.order_total(), 100.0);
    }
}
