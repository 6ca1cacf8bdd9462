use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth, context::AuthState, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let remember_val = remember.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    storage::save_token(&response.access_token, remember_val);
                    // Switching the auth state swaps the login screen for
                    // the main layout.
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user: Some(response.user),
                    });
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #1976d2 0%, #0d47a1 100%);">
            <div style="background: #fff; border-radius: 8px; padding: 32px; width: 360px; box-shadow: 0 4px 16px rgba(0,0,0,0.2);">
                <h1 style="margin: 0 0 4px 0; font-size: 1.3rem; color: #212529;">"Customer Portal"</h1>
                <p style="margin: 0 0 20px 0; font-size: 0.875rem; color: #6c757d;">"Sign in to your account"</p>

                <Show when=move || error_message.get().is_some()>
                    <div style="padding: 10px 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; font-size: 0.875rem; margin-bottom: 14px;">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div style="margin-bottom: 12px;">
                        <label for="email" style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #495057;">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.9rem; box-sizing: border-box;"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div style="margin-bottom: 12px;">
                        <label for="password" style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #495057;">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.9rem; box-sizing: border-box;"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <label style="display: flex; align-items: center; gap: 6px; font-size: 0.875rem; color: #495057; margin-bottom: 16px; cursor: pointer;">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            disabled=move || is_loading.get()
                        />
                        "Keep me signed in"
                    </label>

                    <button
                        type="submit"
                        style="width: 100%; padding: 10px; background: linear-gradient(135deg, #1976d2, #0d47a1); color: #fff; border: none; border-radius: 4px; font-size: 0.95rem; font-weight: 500; cursor: pointer;"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
