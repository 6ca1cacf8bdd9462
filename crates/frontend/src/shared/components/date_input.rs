use leptos::prelude::*;

/// Native date picker bound to a yyyy-mm-dd string signal. The browser
/// displays the value in the user's locale (dd/mm/yyyy for en-MY).
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format ("" = unset)
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd, "" on clear)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 135px;"
        />
    }
}
