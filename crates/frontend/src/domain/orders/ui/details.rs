use contracts::domain::document::{LineItem, OrderRow};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::display_date_or_dash;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::system::auth::context::use_auth;

/// Order detail modal. Line items are fetched on open, keyed by
/// `doc_entry`; a duplicate fetch already in flight is a no-op.
#[component]
pub fn OrderDetails(order: OrderRow, on_close: Callback<()>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (lines, set_lines) = signal(Vec::<LineItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let doc_entry = order.doc_entry;
    let currency = order.currency.clone();

    let (requested, set_requested) = signal(false);
    Effect::new(move |_| {
        if requested.get_untracked() {
            return;
        }
        set_requested.set(true);
        let token = auth_state.get_untracked().token();
        spawn_local(async move {
            match api::fetch_order_lines(&token, doc_entry).await {
                Ok(Some(items)) => {
                    set_lines.set(items);
                }
                Ok(None) => {
                    // Same fetch already running elsewhere; nothing to do.
                }
                Err(e) => {
                    log!("Failed to fetch order {} lines: {}", doc_entry, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let label_style = "font-size: 0.75rem; color: #6c757d; text-transform: uppercase; letter-spacing: 0.4px;";
    let value_style = "font-size: 0.9rem; color: #212529; margin-top: 2px;";
    let cell = "border: 1px solid #dee2e6; padding: 7px 10px;";

    let lines_currency = currency.clone();

    view! {
        <div style="position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0,0,0,0.5); display: flex; align-items: flex-start; justify-content: center; padding-top: 50px; z-index: 1000;">
            <div style="background: #fff; border-radius: 8px; width: 760px; max-width: 94vw; max-height: calc(100vh - 100px); overflow-y: auto; padding: 18px;">
                <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 14px;">
                    <h3 style="margin: 0; font-size: 1.1rem; color: #212529;">
                        {format!("Order {}", order.id)}
                    </h3>
                    <button
                        style="background: none; border: none; cursor: pointer; color: #6c757d; padding: 4px;"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        {icon("x")}
                    </button>
                </div>

                <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin-bottom: 16px;">
                    <div>
                        <div style=label_style>"Customer"</div>
                        <div style=value_style>{order.customer.clone()}</div>
                    </div>
                    <div>
                        <div style=label_style>"PO No"</div>
                        <div style=value_style>{if order.po_no.is_empty() { "—".to_string() } else { order.po_no.clone() }}</div>
                    </div>
                    <div>
                        <div style=label_style>"Order date"</div>
                        <div style=value_style>{display_date_or_dash(&order.order_date)}</div>
                    </div>
                    <div>
                        <div style=label_style>"Due date"</div>
                        <div style=value_style>{display_date_or_dash(&order.due_date)}</div>
                    </div>
                    <div>
                        <div style=label_style>"Status"</div>
                        <div style=value_style>
                            <StatusBadge status=order.status.clone() />
                        </div>
                    </div>
                    <div>
                        <div style=label_style>"Total"</div>
                        <div style=format!("{} font-weight: 600;", value_style)>
                            {format_currency(order.total, &order.currency)}
                        </div>
                    </div>
                </div>

                {move || {
                    if let Some(err) = error.get() {
                        view! {
                            <div style="padding: 10px 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; font-size: 0.875rem;">
                                {err}
                            </div>
                        }
                        .into_any()
                    } else if loading.get() {
                        view! {
                            <div style="text-align: center; padding: 24px; color: #6c757d;">
                                "Loading items..."
                            </div>
                        }
                        .into_any()
                    } else {
                        let items = lines.get();
                        let currency = lines_currency.clone();
                        let grand_total: f64 = items.iter().map(|l| l.total()).sum();
                        view! {
                            <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem;">
                                <thead>
                                    <tr style="background: #f8f9fa;">
                                        <th style=cell>"#"</th>
                                        <th style=cell>"Item"</th>
                                        <th style=cell>"Description"</th>
                                        <th style=format!("{} text-align: right;", cell)>"Qty"</th>
                                        <th style=format!("{} text-align: right;", cell)>"Unit Price"</th>
                                        <th style=format!("{} text-align: right;", cell)>"Total"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .into_iter()
                                        .map(|line| {
                                            let line_total = format_currency(line.total(), &currency);
                                            let price = format_currency(line.price, &currency);
                                            view! {
                                                <tr>
                                                    <td style=cell>{line.no}</td>
                                                    <td style=cell>{line.item_code}</td>
                                                    <td style=cell>{line.description}</td>
                                                    <td style=format!("{} text-align: right;", cell)>
                                                        {format!("{:.0}", line.qty)}
                                                    </td>
                                                    <td style=format!("{} text-align: right;", cell)>{price}</td>
                                                    <td style=format!("{} text-align: right; font-weight: 500;", cell)>
                                                        {line_total}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                                <tfoot>
                                    <tr style="background: #f8f9fa;">
                                        <td colspan="5" style=format!("{} text-align: right; font-weight: 600;", cell)>
                                            "Items total"
                                        </td>
                                        <td style=format!("{} text-align: right; font-weight: 600;", cell)>
                                            {format_currency(grand_total, &currency)}
                                        </td>
                                    </tr>
                                </tfoot>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
