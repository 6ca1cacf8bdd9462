//! List filtering: status, date ranges, and text search.
//!
//! Predicates compose with logical AND and the result is a fresh vector;
//! the source list is never mutated, so clearing a filter always restores
//! the full set.

use contracts::domain::dates::parse_flex;
use contracts::domain::document::{DocStatus, InvoiceRow, OrderRow};

/// Data types searchable by the list text filter.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches_search(&self, needle: &str) -> bool;
}

/// Row types the list filter understands.
pub trait FilterableRow: Searchable {
    fn status(&self) -> &DocStatus;
    fn order_date(&self) -> &str;
    fn due_date(&self) -> &str;
}

/// An inclusive calendar-day range. A start date alone matches exactly
/// that day; an absent bound imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }

    pub fn contains(&self, raw_date: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(date) = parse_flex(raw_date) else {
            // A constrained range can never match a row without a date.
            return false;
        };
        match (parse_flex(&self.from), parse_flex(&self.to)) {
            (Some(from), Some(to)) => date >= from && date <= to,
            (Some(from), None) => date == from,
            (None, Some(to)) => date <= to,
            (None, None) => true,
        }
    }
}

/// The full filter state of a list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter {
    /// Canonical status key, or `"all"` for pass-through.
    pub status: String,
    pub search: String,
    pub order_date: DateRange,
    pub due_date: DateRange,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            status: "all".to_string(),
            search: String::new(),
            order_date: DateRange::default(),
            due_date: DateRange::default(),
        }
    }
}

impl ListFilter {
    /// Number of active constraints, shown as the filter badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.status != "all" {
            count += 1;
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if !self.order_date.is_empty() {
            count += 1;
        }
        if !self.due_date.is_empty() {
            count += 1;
        }
        count
    }

    pub fn apply<T: FilterableRow + Clone>(&self, rows: &[T]) -> Vec<T> {
        let needle = self.search.trim().to_lowercase();
        rows.iter()
            .filter(|row| self.status == "all" || row.status().key() == self.status)
            .filter(|row| self.order_date.contains(row.order_date()))
            .filter(|row| self.due_date.contains(row.due_date()))
            .filter(|row| needle.is_empty() || row.matches_search(&needle))
            .cloned()
            .collect()
    }
}

impl Searchable for OrderRow {
    fn matches_search(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.po_no.to_lowercase().contains(needle)
            || self.customer.to_lowercase().contains(needle)
    }
}

impl FilterableRow for OrderRow {
    fn status(&self) -> &DocStatus {
        &self.status
    }
    fn order_date(&self) -> &str {
        &self.order_date
    }
    fn due_date(&self) -> &str {
        &self.due_date
    }
}

impl Searchable for InvoiceRow {
    fn matches_search(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.po_no.to_lowercase().contains(needle)
            || self.customer.to_lowercase().contains(needle)
    }
}

impl FilterableRow for InvoiceRow {
    fn status(&self) -> &DocStatus {
        &self.status
    }
    fn order_date(&self) -> &str {
        &self.order_date
    }
    fn due_date(&self) -> &str {
        &self.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::normalize::order_row;
    use serde_json::json;

    fn rows() -> Vec<OrderRow> {
        vec![
            order_row(&json!({
                "DocEntry": 1, "DocNum": "1001", "NumAtCard": "PO-A",
                "CardName": "Acme", "DocDate": "2024-06-01",
                "DocDueDate": "2024-07-01", "status": "Open"
            })),
            order_row(&json!({
                "DocEntry": 2, "DocNum": "1002", "NumAtCard": "PO-B",
                "CardName": "Borneo Traders", "DocDate": "2024-06-10",
                "DocDueDate": "2024-07-10", "status": "Closed"
            })),
            order_row(&json!({
                "DocEntry": 3, "DocNum": "1003", "NumAtCard": "PO-C",
                "CardName": "Acme", "DocDate": "2024-05-20",
                "DocDueDate": "2024-06-20", "status": "Open"
            })),
        ]
    }

    #[test]
    fn test_status_all_passes_through() {
        let filter = ListFilter::default();
        assert_eq!(filter.apply(&rows()).len(), 3);
    }

    #[test]
    fn test_status_exact_match() {
        let filter = ListFilter {
            status: "closed".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1002");
    }

    #[test]
    fn test_search_by_document_number() {
        let filter = ListFilter {
            search: "1002".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1002");
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let filter = ListFilter {
            search: "acme".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows()).len(), 2);

        let filter = ListFilter {
            search: "po-b".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows()).len(), 1);
    }

    #[test]
    fn test_start_date_alone_matches_exact_day() {
        let filter = ListFilter {
            order_date: DateRange {
                from: "2024-06-01".to_string(),
                to: String::new(),
            },
            ..Default::default()
        };
        let result = filter.apply(&rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1001");
    }

    #[test]
    fn test_date_range_inclusive() {
        let filter = ListFilter {
            order_date: DateRange {
                from: "2024-05-20".to_string(),
                to: "2024-06-01".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows()).len(), 2);
    }

    #[test]
    fn test_filters_compose_order_independently() {
        // status+search together, versus search applied to a status-filtered
        // copy, versus status applied to a search-filtered copy.
        let combined = ListFilter {
            status: "open".to_string(),
            search: "acme".to_string(),
            ..Default::default()
        };
        let both = combined.apply(&rows());

        let status_only = ListFilter {
            status: "open".to_string(),
            ..Default::default()
        };
        let search_only = ListFilter {
            search: "acme".to_string(),
            ..Default::default()
        };
        let status_then_search = search_only.apply(&status_only.apply(&rows()));
        let search_then_status = status_only.apply(&search_only.apply(&rows()));

        let ids = |v: &[OrderRow]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&both), ids(&status_then_search));
        assert_eq!(ids(&both), ids(&search_then_status));
    }

    #[test]
    fn test_source_list_untouched() {
        let source = rows();
        let filter = ListFilter {
            search: "1002".to_string(),
            ..Default::default()
        };
        let _ = filter.apply(&source);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_active_count() {
        let filter = ListFilter {
            status: "open".to_string(),
            search: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 2);
        assert_eq!(ListFilter::default().active_count(), 0);
    }
}
