//! Token persistence. "Remember me" picks localStorage (survives the
//! browser session); otherwise the token lives in sessionStorage only.

use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "portal_access_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_token(token: &str, remember: bool) {
    clear_token();
    let store = if remember {
        local_storage()
    } else {
        session_storage()
    };
    if let Some(store) = store {
        let _ = store.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Stored token, wherever a previous login put it.
pub fn stored_token() -> Option<String> {
    if let Some(token) = local_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
    {
        return Some(token);
    }
    session_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
}

pub fn clear_token() {
    if let Some(store) = local_storage() {
        let _ = store.remove_item(ACCESS_TOKEN_KEY);
    }
    if let Some(store) = session_storage() {
        let _ = store.remove_item(ACCESS_TOKEN_KEY);
    }
}
