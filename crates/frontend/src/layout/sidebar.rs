use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;

const NAV_ITEMS: [(Page, &str); 5] = [
    (Page::Dashboard, "dashboard"),
    (Page::Orders, "orders"),
    (Page::Invoices, "invoices"),
    (Page::NewOrder, "new-order"),
    (Page::Profile, "user"),
];

#[component]
pub fn Sidebar(active_page: RwSignal<Page>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let on_logout = move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::default());
    };

    view! {
        <aside style="width: 210px; background: #0d47a1; color: #fff; display: flex; flex-direction: column; padding: 16px 0;">
            <div style="padding: 0 16px 16px 16px; font-size: 1.05rem; font-weight: 600; letter-spacing: 0.5px; border-bottom: 1px solid rgba(255,255,255,0.15);">
                "Customer Portal"
            </div>

            <nav style="flex: 1; padding-top: 10px;">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(page, icon_name)| {
                        view! {
                            <button
                                style=move || {
                                    let base = "width: 100%; display: flex; align-items: center; gap: 10px; padding: 10px 16px; border: none; text-align: left; font-size: 0.9rem; cursor: pointer; color: #fff;";
                                    if active_page.get() == page {
                                        format!("{} background: rgba(255,255,255,0.18); font-weight: 600;", base)
                                    } else {
                                        format!("{} background: transparent;", base)
                                    }
                                }
                                on:click=move |_| active_page.set(page)
                            >
                                {icon(icon_name)}
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div style="padding: 12px 16px; border-top: 1px solid rgba(255,255,255,0.15);">
                <div style="font-size: 0.8rem; opacity: 0.85; margin-bottom: 8px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                    {move || {
                        auth_state
                            .get()
                            .user
                            .map(|u| u.name)
                            .unwrap_or_default()
                    }}
                </div>
                <button
                    style="display: flex; align-items: center; gap: 8px; background: none; border: 1px solid rgba(255,255,255,0.4); border-radius: 4px; color: #fff; padding: 6px 12px; font-size: 0.8rem; cursor: pointer; width: 100%;"
                    on:click=on_logout
                >
                    {icon("logout")}
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
