//! Due-window classification for open receivables.
//!
//! "Past due" and "due soon" are decided against a caller-supplied `today`
//! (start of day, local time) so the logic stays deterministic under test.

use chrono::{Datelike, Duration, NaiveDate};

use super::dates::parse_flex;
use super::document::Receivable;

/// Forward window for the "due soon" classification.
#[derive(Debug, Clone, Copy)]
pub struct DueWindow {
    /// Day count ahead of today, used when `calendar_mode` is off.
    pub days: i64,
    /// When set, the cutoff extends to the end of the next calendar month
    /// instead of a fixed day count.
    pub calendar_mode: bool,
}

impl Default for DueWindow {
    fn default() -> Self {
        Self {
            days: 60,
            calendar_mode: false,
        }
    }
}

impl DueWindow {
    /// Last day (inclusive) of the due-soon window.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        if self.calendar_mode {
            end_of_next_month(today)
        } else {
            today + Duration::days(self.days)
        }
    }
}

fn end_of_next_month(today: NaiveDate) -> NaiveDate {
    // First day of the month after next, minus one day.
    let (year, month) = match today.month() {
        11 => (today.year() + 1, 1),
        12 => (today.year() + 1, 2),
        m => (today.year(), m + 2),
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(today)
}

/// Open, unpaid, and overdue. A due date equal to today is not past due;
/// unparseable due dates never qualify.
pub fn is_past_due<T: Receivable>(doc: &T, today: NaiveDate) -> bool {
    doc.status().is_open()
        && doc.outstanding() > 0.0
        && parse_flex(doc.due_date()).is_some_and(|due| due < today)
}

/// Open with a due date inside `[today, cutoff]`.
pub fn is_due_soon<T: Receivable>(doc: &T, today: NaiveDate, window: DueWindow) -> bool {
    doc.status().is_open()
        && parse_flex(doc.due_date())
            .is_some_and(|due| due >= today && due <= window.cutoff(today))
}

/// Sum of outstanding amounts over the past-due subset.
pub fn past_due_total<T: Receivable>(docs: &[T], today: NaiveDate) -> f64 {
    docs.iter()
        .filter(|d| is_past_due(*d, today))
        .map(|d| d.outstanding())
        .sum()
}

/// Sum of outstanding amounts over the due-soon subset.
pub fn due_soon_total<T: Receivable>(docs: &[T], today: NaiveDate, window: DueWindow) -> f64 {
    docs.iter()
        .filter(|d| is_due_soon(*d, today, window))
        .map(|d| d.outstanding())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize::invoice_row;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_past_due_requires_open_unpaid_overdue() {
        let invoices = vec![
            invoice_row(&json!({
                "DocTotal": 100.0, "PaidToDate": 40.0,
                "DocDueDate": "2020-01-01", "DocumentStatus": "Open"
            })),
            invoice_row(&json!({
                "DocTotal": 50.0, "PaidToDate": 50.0,
                "DocDueDate": "2099-01-01", "DocumentStatus": "Open"
            })),
            invoice_row(&json!({
                "DocTotal": 80.0, "PaidToDate": 0.0,
                "DocDueDate": "2020-01-01", "DocumentStatus": "Closed"
            })),
        ];
        assert_eq!(invoices[0].remaining, 60.0);
        assert_eq!(invoices[1].remaining, 0.0);
        assert_eq!(invoices[2].remaining, 80.0);
        // Only the first row qualifies: open, unpaid remainder, overdue.
        assert_eq!(past_due_total(&invoices, today()), 60.0);
    }

    #[test]
    fn test_due_today_is_not_past_due() {
        let invoice = invoice_row(&json!({
            "DocTotal": 100.0, "DocDueDate": "2024-06-15", "DocumentStatus": "Open"
        }));
        assert!(!is_past_due(&invoice, today()));
        assert!(is_due_soon(&invoice, today(), DueWindow::default()));
    }

    #[test]
    fn test_due_soon_window_bounds() {
        let window = DueWindow {
            days: 60,
            calendar_mode: false,
        };
        let inside = invoice_row(&json!({
            "DocTotal": 10.0, "DocDueDate": "2024-08-14", "DocumentStatus": "Open"
        }));
        let outside = invoice_row(&json!({
            "DocTotal": 10.0, "DocDueDate": "2024-08-15", "DocumentStatus": "Open"
        }));
        assert!(is_due_soon(&inside, today(), window));
        assert!(!is_due_soon(&outside, today(), window));
    }

    #[test]
    fn test_calendar_mode_cutoff() {
        let window = DueWindow {
            days: 60,
            calendar_mode: true,
        };
        assert_eq!(
            window.cutoff(today()),
            NaiveDate::from_ymd_opt(2024, 7, 31).unwrap()
        );
        // Year rollover.
        assert_eq!(
            window.cutoff(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap()),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_unparseable_due_date_excluded() {
        let invoice = invoice_row(&json!({
            "DocTotal": 100.0, "DocDueDate": "soon", "DocumentStatus": "Open"
        }));
        assert!(!is_past_due(&invoice, today()));
        assert!(!is_due_soon(&invoice, today(), DueWindow::default()));
    }
}
