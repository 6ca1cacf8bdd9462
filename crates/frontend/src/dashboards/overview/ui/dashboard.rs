use chrono::Utc;
use contracts::domain::dates::parse_flex;
use contracts::domain::document::{InvoiceRow, OrderRow};
use contracts::domain::due::{self, DueWindow};
use contracts::domain::monthly;
use contracts::domain::partner::BusinessPartner;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::invoices::api as invoices_api;
use crate::domain::orders::api as orders_api;
use crate::domain::partners::api as partners_api;
use crate::shared::components::monthly_chart::MonthlyChart;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::display_date_or_dash;
use crate::shared::number_format::format_currency;
use crate::system::auth::context::use_auth;

/// Landing page: account balance, receivable windows, the 12-month
/// purchase history and the newest orders.
///
/// The three fetches fan out independently; a failure in one leaves the
/// others on screen and renders its own figures as a dash.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (orders, set_orders) = signal(Option::<Vec<OrderRow>>::None);
    let (invoices, set_invoices) = signal(Option::<Vec<InvoiceRow>>::None);
    let (partner, set_partner) = signal(Option::<BusinessPartner>::None);

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if is_loaded.get_untracked() {
            return;
        }
        set_is_loaded.set(true);

        let state = auth_state.get_untracked();
        let token = state.token();
        let card_code = state.customer_code();

        {
            let token = token.clone();
            spawn_local(async move {
                match orders_api::fetch_orders(&token).await {
                    Ok(rows) => set_orders.set(Some(rows)),
                    Err(e) => log!("Dashboard orders fetch failed: {}", e),
                }
            });
        }
        {
            let token = token.clone();
            spawn_local(async move {
                match invoices_api::fetch_invoices(&token).await {
                    Ok(rows) => set_invoices.set(Some(rows)),
                    Err(e) => log!("Dashboard invoices fetch failed: {}", e),
                }
            });
        }
        if !card_code.is_empty() {
            spawn_local(async move {
                match partners_api::fetch_partner(&token, &card_code).await {
                    Ok(bp) => set_partner.set(Some(bp)),
                    Err(e) => log!("Dashboard balance fetch failed: {}", e),
                }
            });
        }
    });

    let today = move || Utc::now().date_naive();

    let balance = move || partner.get().map(|bp| bp.balance);
    let open_orders_total = move || {
        orders.get().map(|rows| {
            rows.iter()
                .filter(|r| r.status.is_open())
                .map(|r| r.total)
                .sum::<f64>()
        })
    };
    let due_soon = move || {
        invoices
            .get()
            .map(|rows| due::due_soon_total(&rows, today(), DueWindow::default()))
    };
    let past_due = move || {
        invoices
            .get()
            .map(|rows| due::past_due_total(&rows, today()))
    };

    let buckets = move || monthly::series(&orders.get().unwrap_or_default(), today());

    let recent_orders = move || {
        let mut rows = orders.get().unwrap_or_default();
        rows.sort_by_key(|r| std::cmp::Reverse(parse_flex(&r.order_date)));
        rows.truncate(5);
        rows
    };

    let cell = "border: 1px solid #dee2e6; padding: 8px 10px;";

    view! {
        <div>
            <h2 style="margin: 0 0 16px 0; font-size: 1.2rem; color: #212529;">"Dashboard"</h2>

            <div style="display: flex; gap: 14px; flex-wrap: wrap; margin-bottom: 20px;">
                <StatCard
                    label="Account balance".to_string()
                    icon_name="user".to_string()
                    accent="#1976d2"
                    value=Signal::derive(balance)
                />
                <StatCard
                    label="Open orders".to_string()
                    icon_name="orders".to_string()
                    accent="#f57c00"
                    value=Signal::derive(open_orders_total)
                />
                <StatCard
                    label="Due within 60 days".to_string()
                    icon_name="invoices".to_string()
                    accent="#7b1fa2"
                    value=Signal::derive(due_soon)
                />
                <StatCard
                    label="Past due".to_string()
                    icon_name="invoices".to_string()
                    accent="#c62828"
                    value=Signal::derive(past_due)
                />
            </div>

            <div style="display: grid; grid-template-columns: 3fr 2fr; gap: 16px; align-items: start;">
                <div style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 14px;">
                    <h3 style="margin: 0 0 6px 0; font-size: 1rem; color: #212529;">
                        "Purchases, last 12 months"
                    </h3>
                    <MonthlyChart buckets=Signal::derive(buckets) />
                </div>

                <div style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 14px;">
                    <h3 style="margin: 0 0 10px 0; font-size: 1rem; color: #212529;">"Recent orders"</h3>
                    {move || {
                        let rows = recent_orders();
                        if rows.is_empty() {
                            return view! {
                                <div style="color: #6c757d; font-size: 0.875rem; padding: 10px 0;">
                                    "No orders yet"
                                </div>
                            }
                            .into_any();
                        }
                        view! {
                            <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem;">
                                <thead>
                                    <tr style="background: #f8f9fa;">
                                        <th style=cell>"Order No"</th>
                                        <th style=cell>"Date"</th>
                                        <th style=cell>"Status"</th>
                                        <th style=format!("{} text-align: right;", cell)>"Total"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|order| {
                                            let date = display_date_or_dash(&order.order_date);
                                            let total = format_currency(order.total, &order.currency);
                                            view! {
                                                <tr>
                                                    <td style=format!("{} font-weight: 600; color: #1976d2;", cell)>
                                                        {order.id}
                                                    </td>
                                                    <td style=cell>{date}</td>
                                                    <td style=cell>
                                                        <StatusBadge status=order.status />
                                                    </td>
                                                    <td style=format!("{} text-align: right;", cell)>{total}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
