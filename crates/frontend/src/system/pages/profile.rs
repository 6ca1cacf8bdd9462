use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth};

/// Account page: who is signed in, plus a change-password form.
/// A new/confirm mismatch is rejected locally without a round trip.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (message, set_message) = signal(Option::<(bool, String)>::None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let new_val = new_password.get();
        if new_val != confirm_password.get() {
            set_message.set(Some((false, "New passwords do not match".to_string())));
            return;
        }
        if new_val.len() < 8 {
            set_message.set(Some((
                false,
                "New password must be at least 8 characters".to_string(),
            )));
            return;
        }

        let token = auth_state.get_untracked().token();
        let current_val = current_password.get();
        set_saving.set(true);
        set_message.set(None);

        spawn_local(async move {
            match api::change_password(&token, current_val, new_val).await {
                Ok(()) => {
                    set_message.set(Some((true, "Password updated".to_string())));
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(e) => {
                    log::error!("Password change failed: {}", e);
                    set_message.set(Some((false, e)));
                }
            }
            set_saving.set(false);
        });
    };

    let field_style = "width: 100%; padding: 8px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.9rem; box-sizing: border-box;";

    view! {
        <div style="max-width: 480px;">
            <h2 style="margin: 0 0 16px 0; font-size: 1.2rem; color: #212529;">"My account"</h2>

            {move || {
                let state = auth_state.get();
                match state.user {
                    Some(user) => view! {
                        <div style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 16px; margin-bottom: 20px; font-size: 0.9rem; color: #495057;">
                            <div style="margin-bottom: 6px;"><strong>"Name: "</strong>{user.name}</div>
                            <div style="margin-bottom: 6px;"><strong>"Email: "</strong>{user.email}</div>
                            <div style="margin-bottom: 6px;"><strong>"Account: "</strong>{user.customer_code}</div>
                            <div><strong>"Role: "</strong>{user.role}</div>
                        </div>
                    }.into_any(),
                    None => view! { <div></div> }.into_any(),
                }
            }}

            <h3 style="margin: 0 0 12px 0; font-size: 1rem; color: #212529;">"Change password"</h3>

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

            <form on:submit=on_submit style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 16px;">
                <div style="margin-bottom: 12px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #495057;">"Current password"</label>
                    <input
                        type="password"
                        style=field_style
                        prop:value=move || current_password.get()
                        on:input=move |ev| set_current_password.set(event_target_value(&ev))
                        required
                        disabled=move || saving.get()
                    />
                </div>
                <div style="margin-bottom: 12px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #495057;">"New password"</label>
                    <input
                        type="password"
                        style=field_style
                        prop:value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        required
                        disabled=move || saving.get()
                    />
                </div>
                <div style="margin-bottom: 16px;">
                    <label style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #495057;">"Confirm new password"</label>
                    <input
                        type="password"
                        style=field_style
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        required
                        disabled=move || saving.get()
                    />
                </div>
                <button
                    type="submit"
                    style="padding: 8px 20px; background: #1976d2; color: #fff; border: none; border-radius: 4px; font-size: 0.9rem; font-weight: 500; cursor: pointer;"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Update password" }}
                </button>
            </form>
        </div>
    }
}
