//! Tenant login.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::LoginResponse;

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `POST /login`. The caller turns the response into a session via
/// [`LoginResponse::into_session`] and persists it.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    client
        .post_json("/login", &LoginRequest { email, password })
        .await
}
