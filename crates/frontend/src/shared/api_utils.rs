//! API utilities for talking to the ERP gateway.
//!
//! All portal requests go through here: URL construction from the current
//! window location, bearer-token headers, envelope unwrapping, and the
//! in-flight request guard that de-duplicates repeated detail fetches.

use std::cell::RefCell;
use std::collections::HashSet;

use contracts::domain::normalize;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Base URL for API requests, derived from the current window location.
/// The gateway serves the portal and the `/api` routes from one origin.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Authenticated GET returning a typed body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Authenticated GET for list endpoints. Accepts both the usual
/// `{ "data": [...] }` envelope and a bare array.
pub async fn get_records(path: &str, token: &str) -> Result<Vec<Value>, String> {
    let value: Value = get_json(path, token).await?;
    Ok(normalize::records(value))
}

/// Authenticated POST with a JSON body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

thread_local! {
    static IN_FLIGHT: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Marks a request key as in flight until dropped.
pub struct InFlightGuard {
    key: String,
}

/// Claim `key` for a request. Returns `None` while a request with the same
/// key is still running, so rapid repeated triggers (double-clicking a row,
/// reopening a modal) collapse into one fetch instead of racing.
pub fn try_begin(key: &str) -> Option<InFlightGuard> {
    IN_FLIGHT.with(|set| {
        let mut set = set.borrow_mut();
        if set.contains(key) {
            None
        } else {
            set.insert(key.to_string());
            Some(InFlightGuard {
                key: key.to_string(),
            })
        }
    })
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        IN_FLIGHT.with(|set| {
            set.borrow_mut().remove(&self.key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_blocked_until_guard_drops() {
        let guard = try_begin("orders/77");
        assert!(guard.is_some());
        assert!(try_begin("orders/77").is_none());
        // A different key is unaffected.
        assert!(try_begin("invoices/77").is_some());

        drop(guard);
        assert!(try_begin("orders/77").is_some());
    }
}
