use contracts::domain::partner::{AddressKind, PartnerAddress};
use contracts::domain::sales_entry::{DraftLine, SalesOrderDraft};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::items::api as items_api;
use crate::domain::partners::api as partners_api;
use crate::domain::sales_entry::api;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::system::auth::context::use_auth;

/// One editable line plus the unit weight from the item master (display
/// only, not part of the submitted payload).
#[derive(Clone, Debug, Default)]
struct LineEdit {
    item_code: String,
    description: String,
    qty: f64,
    price: f64,
    weight: f64,
}

impl LineEdit {
    fn total(&self) -> f64 {
        self.qty * self.price
    }

    fn to_draft_line(&self) -> DraftLine {
        DraftLine {
            item_code: self.item_code.trim().to_string(),
            description: self.description.clone(),
            qty: self.qty,
            price: self.price,
        }
    }
}

#[component]
pub fn NewOrderPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (addresses, set_addresses) = signal(Vec::<PartnerAddress>::new());
    let (po_no, set_po_no) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (comments, set_comments) = signal(String::new());
    let (bill_to, set_bill_to) = signal(String::new());
    let (ship_to, set_ship_to) = signal(String::new());
    let (lines, set_lines) = signal(vec![LineEdit::default()]);
    let (submitting, set_submitting) = signal(false);
    let (message, set_message) = signal(Option::<(bool, String)>::None);

    // One reference per draft; regenerated after a successful submission.
    let client_ref = StoredValue::new(Uuid::new_v4());

    // Address book for the signed-in customer.
    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if is_loaded.get_untracked() {
            return;
        }
        set_is_loaded.set(true);
        let state = auth_state.get_untracked();
        let token = state.token();
        let card_code = state.customer_code();
        if card_code.is_empty() {
            return;
        }
        spawn_local(async move {
            match partners_api::fetch_addresses(&token, &card_code).await {
                Ok(list) => {
                    // Preselect the first address of each kind.
                    if let Some(bill) = list.iter().find(|a| a.kind == AddressKind::BillTo) {
                        set_bill_to.set(bill.display());
                    }
                    if let Some(ship) = list.iter().find(|a| a.kind == AddressKind::ShipTo) {
                        set_ship_to.set(ship.display());
                    }
                    set_addresses.set(list);
                }
                Err(e) => {
                    log!("Failed to fetch addresses: {}", e);
                }
            }
        });
    });

    // Item-master lookup fills description, price and weight for one line.
    let lookup_item = move |index: usize| {
        let code = lines
            .get_untracked()
            .get(index)
            .map(|l| l.item_code.trim().to_string())
            .unwrap_or_default();
        if code.is_empty() {
            return;
        }
        let token = auth_state.get_untracked().token();
        spawn_local(async move {
            match items_api::fetch_item(&token, &code).await {
                Ok(info) => {
                    set_lines.update(|lines| {
                        if let Some(line) = lines.get_mut(index) {
                            line.description = info.item_name;
                            if line.price == 0.0 {
                                line.price = info.price;
                            }
                            line.weight = info.weight;
                        }
                    });
                }
                Err(e) => {
                    log!("Item lookup failed for {}: {}", code, e);
                }
            }
        });
    };

    let add_line = move |_| {
        set_lines.update(|lines| lines.push(LineEdit::default()));
    };

    let reset_form = move || {
        set_po_no.set(String::new());
        set_due_date.set(String::new());
        set_comments.set(String::new());
        set_lines.set(vec![LineEdit::default()]);
        client_ref.set_value(Uuid::new_v4());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let state = auth_state.get_untracked();
        let draft = SalesOrderDraft {
            client_ref: client_ref.get_value(),
            customer_code: state.customer_code(),
            po_no: po_no.get(),
            due_date: due_date.get(),
            bill_to: bill_to.get(),
            ship_to: ship_to.get(),
            comments: comments.get(),
            lines: lines.get().iter().map(LineEdit::to_draft_line).collect(),
        };

        if let Err(e) = draft.validate() {
            set_message.set(Some((false, e)));
            return;
        }

        let token = state.token();
        set_submitting.set(true);
        set_message.set(None);

        spawn_local(async move {
            match api::submit_order(&token, &draft).await {
                Ok(doc_num) => {
                    let text = if doc_num.is_empty() {
                        "Order submitted".to_string()
                    } else {
                        format!("Order {} submitted", doc_num)
                    };
                    set_message.set(Some((true, text)));
                    reset_form();
                }
                Err(e) => {
                    log!("Order submission failed: {}", e);
                    set_message.set(Some((false, e)));
                }
            }
            set_submitting.set(false);
        });
    };

    let order_total = move || lines.get().iter().map(|l| l.total()).sum::<f64>();
    let total_weight = move || lines.get().iter().map(|l| l.qty * l.weight).sum::<f64>();

    let field_style = "padding: 7px 9px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; box-sizing: border-box;";
    let label_style = "display: block; margin-bottom: 4px; font-size: 0.8rem; color: #495057;";
    let cell = "border: 1px solid #dee2e6; padding: 6px 8px;";

    view! {
        <div style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 16px; max-width: 980px;">
            <h2 style="margin: 0 0 14px 0; font-size: 1.2rem; color: #212529;">"New Sales Order"</h2>

            {move || {
                if let Some((ok, text)) = message.get() {
                    let style = if ok {
                        "padding: 10px 12px; background: #e8f5e9; border: 1px solid #c8e6c9; border-radius: 4px; color: #2e7d32; font-size: 0.875rem; margin-bottom: 12px;"
                    } else {
                        "padding: 10px 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; font-size: 0.875rem; margin-bottom: 12px;"
                    };
                    view! { <div style=style>{text}</div> }.into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}

            <form on:submit=on_submit>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 14px;">
                    <div>
                        <label style=label_style>"PO number"</label>
                        <input
                            type="text"
                            style=format!("width: 100%; {}", field_style)
                            prop:value=move || po_no.get()
                            on:input=move |ev| set_po_no.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </div>
                    <div>
                        <label style=label_style>"Requested delivery date"</label>
                        <input
                            type="date"
                            style=format!("width: 100%; {}", field_style)
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </div>
                    <div>
                        <label style=label_style>"Comments"</label>
                        <input
                            type="text"
                            style=format!("width: 100%; {}", field_style)
                            prop:value=move || comments.get()
                            on:input=move |ev| set_comments.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </div>
                    <div>
                        <label style=label_style>"Bill to"</label>
                        <select
                            style=format!("width: 100%; {}", field_style)
                            on:change=move |ev| set_bill_to.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        >
                            {move || {
                                let current = bill_to.get();
                                addresses
                                    .get()
                                    .into_iter()
                                    .filter(|a| a.kind == AddressKind::BillTo)
                                    .map(|a| {
                                        let display = a.display();
                                        let selected = display == current;
                                        view! {
                                            <option value=display.clone() selected=selected>
                                                {display.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div>
                        <label style=label_style>"Ship to"</label>
                        <select
                            style=format!("width: 100%; {}", field_style)
                            on:change=move |ev| set_ship_to.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        >
                            {move || {
                                let current = ship_to.get();
                                addresses
                                    .get()
                                    .into_iter()
                                    .filter(|a| a.kind == AddressKind::ShipTo)
                                    .map(|a| {
                                        let display = a.display();
                                        let selected = display == current;
                                        view! {
                                            <option value=display.clone() selected=selected>
                                                {display.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>

                <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem; margin-bottom: 10px;">
                    <thead>
                        <tr style="background: #f8f9fa;">
                            <th style=cell>"#"</th>
                            <th style=cell>"Item code"</th>
                            <th style=cell>"Description"</th>
                            <th style=format!("{} width: 80px;", cell)>"Qty"</th>
                            <th style=format!("{} width: 110px;", cell)>"Unit price"</th>
                            <th style=format!("{} width: 90px; text-align: right;", cell)>"Weight"</th>
                            <th style=format!("{} width: 110px; text-align: right;", cell)>"Total"</th>
                            <th style=format!("{} width: 40px;", cell)></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            lines
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, line)| {
                                    let line_total = format_currency(line.total(), "");
                                    let weight = format!("{:.1} kg", line.qty * line.weight);
                                    view! {
                                        <tr>
                                            <td style=cell>{i + 1}</td>
                                            <td style=cell>
                                                <input
                                                    type="text"
                                                    style=format!("width: 110px; {}", field_style)
                                                    prop:value=line.item_code.clone()
                                                    on:input=move |ev| {
                                                        let val = event_target_value(&ev);
                                                        set_lines.update(|lines| {
                                                            if let Some(l) = lines.get_mut(i) {
                                                                l.item_code = val.clone();
                                                            }
                                                        });
                                                    }
                                                    on:blur=move |_| lookup_item(i)
                                                    disabled=move || submitting.get()
                                                />
                                            </td>
                                            <td style=cell>
                                                <input
                                                    type="text"
                                                    style=format!("width: 100%; {}", field_style)
                                                    prop:value=line.description.clone()
                                                    on:input=move |ev| {
                                                        let val = event_target_value(&ev);
                                                        set_lines.update(|lines| {
                                                            if let Some(l) = lines.get_mut(i) {
                                                                l.description = val.clone();
                                                            }
                                                        });
                                                    }
                                                    disabled=move || submitting.get()
                                                />
                                            </td>
                                            <td style=cell>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="1"
                                                    style=format!("width: 70px; {}", field_style)
                                                    prop:value=format!("{}", line.qty)
                                                    on:input=move |ev| {
                                                        let val = event_target_value(&ev).parse().unwrap_or(0.0);
                                                        set_lines.update(|lines| {
                                                            if let Some(l) = lines.get_mut(i) {
                                                                l.qty = val;
                                                            }
                                                        });
                                                    }
                                                    disabled=move || submitting.get()
                                                />
                                            </td>
                                            <td style=cell>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    step="0.01"
                                                    style=format!("width: 95px; {}", field_style)
                                                    prop:value=format!("{}", line.price)
                                                    on:input=move |ev| {
                                                        let val = event_target_value(&ev).parse().unwrap_or(0.0);
                                                        set_lines.update(|lines| {
                                                            if let Some(l) = lines.get_mut(i) {
                                                                l.price = val;
                                                            }
                                                        });
                                                    }
                                                    disabled=move || submitting.get()
                                                />
                                            </td>
                                            <td style=format!("{} text-align: right; color: #6c757d;", cell)>{weight}</td>
                                            <td style=format!("{} text-align: right; font-weight: 500;", cell)>{line_total}</td>
                                            <td style=format!("{} text-align: center;", cell)>
                                                <button
                                                    type="button"
                                                    style="background: none; border: none; cursor: pointer; color: #c62828; padding: 2px;"
                                                    on:click=move |_| {
                                                        set_lines.update(|lines| {
                                                            if lines.len() > 1 {
                                                                lines.remove(i);
                                                            }
                                                        });
                                                    }
                                                    title="Remove line"
                                                    disabled=move || submitting.get()
                                                >
                                                    {icon("x")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 14px;">
                    <button
                        type="button"
                        style="display: inline-flex; align-items: center; gap: 6px; background: none; border: 1px dashed #ced4da; border-radius: 4px; padding: 6px 12px; font-size: 0.85rem; color: #495057; cursor: pointer;"
                        on:click=add_line
                        disabled=move || submitting.get()
                    >
                        {icon("new-order")}
                        "Add line"
                    </button>
                    <div style="font-size: 0.9rem; color: #495057; display: flex; gap: 18px;">
                        <span>
                            "Total weight: "
                            <strong>{move || format!("{:.1} kg", total_weight())}</strong>
                        </span>
                        <span>
                            "Order total: "
                            <strong>{move || format_currency(order_total(), "")}</strong>
                        </span>
                    </div>
                </div>

                <button
                    type="submit"
                    style="padding: 9px 24px; background: linear-gradient(135deg, #1976d2, #0d47a1); color: #fff; border: none; border-radius: 4px; font-size: 0.95rem; font-weight: 500; cursor: pointer;"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit order" }}
                </button>
            </form>
        </div>
    }
}
