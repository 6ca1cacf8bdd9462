//! Monthly purchase-history series for the dashboard chart.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dates::parse_flex;
use super::document::OrderRow;

pub const SERIES_MONTHS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Display label, e.g. "Jul 2024".
    pub month: String,
    pub amount: f64,
}

/// Build the 12-month order-total series ending at the month of `today`,
/// oldest bucket first. Months without orders stay at zero; orders older
/// than the window (or with unparseable dates) are excluded.
pub fn series(orders: &[OrderRow], today: NaiveDate) -> Vec<MonthlyBucket> {
    let keys = month_keys(today);
    let mut amounts = vec![0.0; keys.len()];

    for order in orders {
        let Some(date) = parse_flex(&order.order_date) else {
            continue;
        };
        let key = (date.year(), date.month());
        if let Some(pos) = keys.iter().position(|k| *k == key) {
            amounts[pos] += order.total;
        }
    }

    keys.iter()
        .zip(amounts)
        .map(|(&(year, month), amount)| MonthlyBucket {
            month: month_label(year, month),
            amount,
        })
        .collect()
}

/// The 12 consecutive `(year, month)` keys ending at the current month,
/// oldest first.
fn month_keys(today: NaiveDate) -> Vec<(i32, u32)> {
    let mut keys = Vec::with_capacity(SERIES_MONTHS);
    let mut year = today.year();
    let mut month = today.month();
    for _ in 0..SERIES_MONTHS {
        keys.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    keys.reverse();
    keys
}

fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let name = NAMES.get(month as usize - 1).copied().unwrap_or("?");
    format!("{} {}", name, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize::order_row;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn order(date: &str, total: f64) -> OrderRow {
        order_row(&json!({ "DocDate": date, "DocTotal": total }))
    }

    #[test]
    fn test_always_twelve_consecutive_buckets() {
        let buckets = series(&[], today());
        assert_eq!(buckets.len(), 12);
        assert_eq!(buckets[0].month, "Jul 2023");
        assert_eq!(buckets[11].month, "Jun 2024");
        assert!(buckets.iter().all(|b| b.amount == 0.0));
    }

    #[test]
    fn test_totals_land_in_their_month() {
        let orders = vec![
            order("2024-06-01", 100.0),
            order("2024-06-20", 50.0),
            order("2024-01-05", 30.0),
        ];
        let buckets = series(&orders, today());
        assert_eq!(buckets[11].amount, 150.0);
        let jan = buckets.iter().find(|b| b.month == "Jan 2024").unwrap();
        assert_eq!(jan.amount, 30.0);
    }

    #[test]
    fn test_old_and_invalid_dates_excluded() {
        let orders = vec![
            order("2022-06-01", 999.0),
            order("bogus", 999.0),
            order("2024-05-10", 40.0),
        ];
        let buckets = series(&orders, today());
        let total: f64 = buckets.iter().map(|b| b.amount).sum();
        assert_eq!(total, 40.0);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut orders = vec![
            order("2024-06-01", 100.0),
            order("2023-08-01", 10.0),
            order("2024-02-14", 25.0),
        ];
        let forward = series(&orders, today());
        orders.reverse();
        let reversed = series(&orders, today());
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_year_rollover() {
        let buckets = series(&[], NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(buckets[0].month, "Feb 2023");
        assert_eq!(buckets[11].month, "Jan 2024");
    }
}
