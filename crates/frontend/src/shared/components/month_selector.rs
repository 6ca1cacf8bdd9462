use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)? - Duration::days(1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)? - Duration::days(1)
    };
    Some((start, end))
}

fn select_month(on_select: Callback<(String, String)>, year: i32, month: u32) {
    if let Some((start, end)) = month_bounds(year, month) {
        on_select.run((
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ));
    }
}

/// Quick-range buttons next to a date-range filter: previous month,
/// current month, and clear.
#[component]
pub fn MonthSelector(
    /// Callback receiving the range (from, to) in yyyy-mm-dd format
    on_select: Callback<(String, String)>,
) -> impl IntoView {
    let on_previous_month = move |_| {
        let now = Utc::now().date_naive();
        let (year, month) = if now.month() == 1 {
            (now.year() - 1, 12)
        } else {
            (now.year(), now.month() - 1)
        };
        select_month(on_select, year, month);
    };

    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        select_month(on_select, now.year(), now.month());
    };

    let on_clear = move |_| {
        on_select.run((String::new(), String::new()));
    };

    let button_style = "width: 34px; height: 30px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.75rem; background: #fff; color: #495057; cursor: pointer; font-weight: 500; padding: 0;";

    view! {
        <div style="display: flex; align-items: center; gap: 4px;">
            <button on:click=on_previous_month style=button_style title="Previous month">
                "-1M"
            </button>
            <button on:click=on_current_month style=button_style title="Current month">
                "0M"
            </button>
            <button on:click=on_clear style=button_style title="Clear range">
                "×"
            </button>
        </div>
    }
}
