use contracts::domain::document::OrderRow;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::domain::orders::ui::details::OrderDetails;
use crate::routes::routes::ArrivalTarget;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::month_selector::MonthSelector;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::display_date_or_dash;
use crate::shared::export::{csv_escape, download_csv};
use crate::shared::filters::ListFilter;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::pagination;
use crate::system::auth::context::use_auth;

fn orders_csv(rows: &[OrderRow]) -> String {
    let mut csv = String::new();
    csv.push_str("Order No,PO No,Order Date,Due Date,Status,Currency,Total\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{:.2}\n",
            csv_escape(&row.id),
            csv_escape(&row.po_no),
            display_date_or_dash(&row.order_date),
            display_date_or_dash(&row.due_date),
            csv_escape(row.status.label()),
            csv_escape(&row.currency),
            row.total
        ));
    }
    csv
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (orders, set_orders) = signal(Vec::<OrderRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (selected, set_selected) = signal(Option::<OrderRow>::None);

    let (filter, set_filter) = signal(ListFilter::default());
    let (page, set_page) = signal(1usize);
    let (page_size, set_page_size) = signal(10usize);
    let (row_height, set_row_height) = signal(pagination::DEFAULT_ROW_HEIGHT);

    // Row flagged by a `?doc=` arrival link, keyed by doc_entry.
    let (flagged, set_flagged) = signal(Option::<i64>::None);

    let table_ref = NodeRef::<leptos::html::Div>::new();

    let load_orders = move || {
        let token = auth_state.get_untracked().token();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_orders(&token).await {
                Ok(rows) => {
                    set_orders.set(rows);
                }
                Err(e) => {
                    log!("Failed to fetch orders: {}", e);
                    set_orders.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            load_orders();
        }
    });

    // Page size = space below the table top, divided by the measured row
    // height. Recomputed on viewport resize.
    let recompute_page_size = move || {
        let Some(container) = table_ref.get_untracked() else {
            return;
        };
        let rect = container.get_bounding_client_rect();
        let viewport_height = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        // Leave room for the header row and the pagination bar.
        let available = (viewport_height - rect.top() - 110.0).max(0.0);
        set_page_size.set(pagination::adaptive_page_size(
            available,
            row_height.get_untracked(),
        ));
    };

    Effect::new(move |_| {
        recompute_page_size();
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::wrap(Box::new(move || recompute_page_size()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    });

    // Re-measure the row height after each reload; a meaningful change
    // resets to page 1 so the new geometry starts from the top.
    Effect::new(move |_| {
        if orders.get().is_empty() {
            return;
        }
        let Some(container) = table_ref.get_untracked() else {
            return;
        };
        let Ok(Some(row)) = container.query_selector("tbody tr") else {
            return;
        };
        let measured = row.get_bounding_client_rect().height();
        if measured > 0.0 && pagination::row_height_changed(row_height.get_untracked(), measured) {
            set_row_height.set(measured);
            set_page.set(1);
            recompute_page_size();
        }
    });

    // Arrival highlight: flag the linked row for 4 seconds once it exists.
    let arrival = use_context::<ArrivalTarget>();
    Effect::new(move |_| {
        let rows = orders.get();
        if rows.is_empty() {
            return;
        }
        let Some(target) = arrival.and_then(|a| a.take()) else {
            return;
        };
        let Some(row) = rows
            .iter()
            .find(|r| r.id == target || r.doc_entry.to_string() == target)
        else {
            return;
        };
        let doc_entry = row.doc_entry;
        set_flagged.set(Some(doc_entry));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            set_flagged.set(None);
        });
    });

    let filtered = move || filter.get().apply(&orders.get());
    let total_pages = move || pagination::total_pages(filtered().len(), page_size.get());
    let current_page = move || pagination::clamp_page(page.get(), total_pages());
    let visible = move || pagination::page_slice(&filtered(), current_page(), page_size.get());

    let th_style = "border: 1px solid #dee2e6; padding: 9px 10px; text-align: left; font-size: 0.8rem; color: #495057; background: #f8f9fa; white-space: nowrap;";

    view! {
        <div style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 14px;">
            {move || {
                selected
                    .get()
                    .map(|order| {
                        view! {
                            <OrderDetails
                                order=order
                                on_close=Callback::new(move |_| set_selected.set(None))
                            />
                        }
                    })
            }}

            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px;">
                <h2 style="margin: 0; font-size: 1.2rem; color: #212529;">"Orders"</h2>
                <div style="display: flex; align-items: center; gap: 10px;">
                    <PaginationControls
                        current_page=Signal::derive(current_page)
                        total_pages=Signal::derive(total_pages)
                        total_count=Signal::derive(move || filtered().len())
                        on_page_change=Callback::new(move |p| set_page.set(p))
                    />
                    <button
                        style="display: inline-flex; align-items: center; gap: 6px; background: #28a745; color: #fff; border: none; border-radius: 4px; padding: 6px 12px; font-size: 0.8rem; cursor: pointer; font-weight: 500;"
                        on:click=move |_| {
                            if let Err(e) = download_csv("orders.csv", &orders_csv(&filtered())) {
                                log!("Failed to export orders: {}", e);
                            }
                        }
                        prop:disabled=move || loading.get() || orders.get().is_empty()
                    >
                        {icon("download")}
                        "CSV"
                    </button>
                    <button
                        style="background: #1976d2; color: #fff; border: none; border-radius: 4px; padding: 6px 12px; font-size: 0.8rem; cursor: pointer; font-weight: 500;"
                        on:click=move |_| load_orders()
                        prop:disabled=move || loading.get()
                    >
                        "↻ Refresh"
                    </button>
                </div>
            </div>

            <div style="display: flex; align-items: center; gap: 14px; flex-wrap: wrap; padding: 8px 0 12px 0; border-bottom: 1px solid #e9ecef; margin-bottom: 10px;">
                <SearchInput
                    on_change=Callback::new(move |text| {
                        set_filter.update(|f| f.search = text);
                        set_page.set(1);
                    })
                    placeholder="Order no, PO no, customer..."
                />

                <div style="display: flex; align-items: center; gap: 6px;">
                    <label style="font-size: 0.8rem; color: #495057;">"Status:"</label>
                    <select
                        style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;"
                        on:change=move |ev| {
                            set_filter.update(|f| f.status = event_target_value(&ev));
                            set_page.set(1);
                        }
                    >
                        <option value="all">"All"</option>
                        <option value="open">"Open"</option>
                        <option value="in_transit">"In Transit"</option>
                        <option value="closed">"Delivered"</option>
                    </select>
                </div>

                <div style="display: flex; align-items: center; gap: 6px;">
                    <label style="font-size: 0.8rem; color: #495057;">"Order date:"</label>
                    <DateInput
                        value=Signal::derive(move || filter.get().order_date.from)
                        on_change=move |val| {
                            set_filter.update(|f| f.order_date.from = val);
                            set_page.set(1);
                        }
                    />
                    <span style="color: #6c757d;">"—"</span>
                    <DateInput
                        value=Signal::derive(move || filter.get().order_date.to)
                        on_change=move |val| {
                            set_filter.update(|f| f.order_date.to = val);
                            set_page.set(1);
                        }
                    />
                    <MonthSelector
                        on_select=Callback::new(move |(from, to)| {
                            set_filter.update(|f| {
                                f.order_date.from = from;
                                f.order_date.to = to;
                            });
                            set_page.set(1);
                        })
                    />
                </div>
            </div>

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div style="padding: 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; margin-bottom: 12px;">
                            <strong>"Error: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}

            {move || {
                if loading.get() {
                    view! {
                        <div style="text-align: center; padding: 40px; color: #6c757d;">
                            "Loading orders..."
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}

            {move || {
                if !loading.get() && error.get().is_none() {
                    let rows = filtered();
                    let count = rows.len();
                    let amount: f64 = rows.iter().map(|r| r.total).sum();
                    view! {
                        <div style="margin-bottom: 8px; font-size: 0.85rem; color: #495057;">
                            <strong>{count}</strong>
                            " orders, "
                            <strong>{format_currency(amount, "")}</strong>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}

            <div node_ref=table_ref style="overflow-x: auto;">
                {move || {
                    if loading.get() || error.get().is_some() {
                        return view! { <div></div> }.into_any();
                    }
                    let rows = visible();
                    view! {
                        <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem;">
                            <thead>
                                <tr>
                                    <th style=th_style>"Order No"</th>
                                    <th style=th_style>"PO No"</th>
                                    <th style=th_style>"Order Date"</th>
                                    <th style=th_style>"Due Date"</th>
                                    <th style=th_style>"Status"</th>
                                    <th style=format!("{} text-align: right;", th_style)>"Total"</th>
                                    <th style=th_style></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|order| {
                                        let row_for_click = order.clone();
                                        let is_flagged = flagged.get() == Some(order.doc_entry);
                                        let row_style = if is_flagged {
                                            "cursor: pointer; background: #fff8e1;"
                                        } else {
                                            "cursor: pointer; background: #fff;"
                                        };
                                        let order_date = display_date_or_dash(&order.order_date);
                                        let due_date = display_date_or_dash(&order.due_date);
                                        let total = format_currency(order.total, &order.currency);
                                        let download = order.download.clone();
                                        view! {
                                            <tr
                                                style=row_style
                                                on:click=move |_| set_selected.set(Some(row_for_click.clone()))
                                            >
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px; font-weight: 600; color: #1976d2;">
                                                    {order.id.clone()}
                                                </td>
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px;">{order.po_no.clone()}</td>
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px;">{order_date}</td>
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px;">{due_date}</td>
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px;">
                                                    <StatusBadge status=order.status.clone() />
                                                </td>
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px; text-align: right; font-weight: 500;">
                                                    {total}
                                                </td>
                                                <td style="border: 1px solid #dee2e6; padding: 8px 10px; text-align: center;">
                                                    {if download != "#" {
                                                        view! {
                                                            <a
                                                                href=download
                                                                target="_blank"
                                                                style="color: #1976d2;"
                                                                on:click=move |ev| ev.stop_propagation()
                                                            >
                                                                {icon("download")}
                                                            </a>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        view! { <span style="color: #ced4da;">"—"</span> }.into_any()
                                                    }}
                                                </td>
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
    }
}
