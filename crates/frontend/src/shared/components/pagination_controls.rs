use crate::shared::icons::icon;
use leptos::prelude::*;

/// First/previous/next/last navigation for a list page.
///
/// Pages are 1-based; every transition is clamped, so clicking past either
/// end is a no-op. There is no page-size selector — the size is derived
/// from the available viewport height by the owning page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (>= 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered rows
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback with the new page number
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let btn_style = "background: #fff; border: 1px solid #ced4da; border-radius: 4px; padding: 4px 8px; cursor: pointer; color: #495057; display: inline-flex; align-items: center;";

    view! {
        <div style="display: flex; align-items: center; gap: 6px;">
            <button
                style=btn_style
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                style=btn_style
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span style="font-size: 0.8rem; color: #495057; min-width: 90px; text-align: center;">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                style=btn_style
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                style=btn_style
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=move || current_page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
