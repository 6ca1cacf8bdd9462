use contracts::system::auth::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, get_json, post_json};

/// Login with email and password. The only unauthenticated call the
/// portal makes.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Validate a stored token by fetching the current user.
pub async fn current_user(token: &str) -> Result<UserInfo, String> {
    get_json("/api/users/me", token).await
}

pub async fn change_password(
    token: &str,
    current_password: String,
    new_password: String,
) -> Result<(), String> {
    let request = ChangePasswordRequest {
        current_password,
        new_password,
    };
    let _: serde_json::Value = post_json("/api/users/me/password", token, &request).await?;
    Ok(())
}
