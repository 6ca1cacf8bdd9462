use contracts::domain::monthly::MonthlyBucket;
use leptos::prelude::*;

use crate::shared::number_format::format_amount;

/// Purchase-history bar chart: one bar per bucket, scaled against the
/// busiest month. Pure markup, no charting library.
#[component]
pub fn MonthlyChart(
    #[prop(into)] buckets: Signal<Vec<MonthlyBucket>>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: flex-end; gap: 8px; height: 180px; padding: 12px 4px 4px 4px;">
            {move || {
                let data = buckets.get();
                let max = data.iter().map(|b| b.amount).fold(0.0_f64, f64::max);
                data.into_iter()
                    .map(|bucket| {
                        let ratio = if max > 0.0 { bucket.amount / max } else { 0.0 };
                        let bar_px = (ratio * 140.0).round().max(2.0);
                        let title = format!("{}: RM {}", bucket.month, format_amount(bucket.amount));
                        view! {
                            <div
                                style="flex: 1; display: flex; flex-direction: column; align-items: center; gap: 4px;"
                                title=title
                            >
                                <div style=format!(
                                    "width: 70%; height: {}px; background: linear-gradient(180deg, #1976d2, #0d47a1); border-radius: 3px 3px 0 0;",
                                    bar_px
                                )></div>
                                <span style="font-size: 0.65rem; color: #6c757d; white-space: nowrap;">
                                    {bucket.month}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
