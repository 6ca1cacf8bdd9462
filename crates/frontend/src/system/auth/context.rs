//! The single source of truth for "current user".
//!
//! Components never read web storage directly; they take the session from
//! this context, so token handling stays in one place.

use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn token(&self) -> String {
        self.access_token.clone().unwrap_or_default()
    }

    /// BP card code every order/invoice fetch is scoped to.
    pub fn customer_code(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.customer_code.clone())
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore a stored session on mount; a token the backend no longer
    // accepts is cleared rather than kept around half-valid.
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(token) = storage::stored_token() else {
                return;
            };
            match api::current_user(&token).await {
                Ok(user) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(token),
                        user: Some(user),
                    });
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_token();
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
