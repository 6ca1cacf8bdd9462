use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Debounced text search with a clear button.
///
/// Keystrokes update local state immediately; the callback fires after a
/// 300 ms pause so filtering does not run on every character.
#[component]
pub fn SearchInput(
    /// Callback with the settled search text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style="width: 220px; padding: 6px 30px 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if input_value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button
                            style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 2px; color: #6c757d; line-height: 1;"
                            on:click=clear
                            title="Clear"
                        >
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
