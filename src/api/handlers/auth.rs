//! Handlers for dashboard login and logout.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, LogoutResponse};
use crate::api::middleware::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges e-mail and password for a session token.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Request Body
///
/// ```json
/// { "email": "admin@example.com", "password": "..." }
/// ```
///
/// # Response
///
/// The token in the body plus an `HttpOnly` `auth_token` cookie with the
/// same lifetime.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body and 401 Unauthorized for
/// wrong credentials or when login is not configured.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let issued = state.auth_service.login(&payload.email, &payload.password)?;
    let max_age = state.auth_service.session_ttl().num_seconds();
    let cookie = session_cookie(&issued.token, max_age)?;

    tracing::info!(email = %payload.email, "User logged in");

    let body = LoginResponse {
        token: issued.token,
        email: payload.email.trim().to_lowercase(),
        expires_at: issued.expires_at,
    };
    Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
///
/// Tokens are stateless, so a copied token stays valid until it expires.
pub async fn logout_handler() -> Result<Response, AppError> {
    let cookie = session_cookie("", 0)?;
    Ok(([(SET_COOKIE, cookie)], Json(LogoutResponse { success: true })).into_response())
}

fn session_cookie(token: &str, max_age: i64) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={token}; HttpOnly; Path=/; SameSite=Lax; Max-Age={max_age}"
    ))
    .map_err(|_| AppError::internal("Failed to build session cookie", json!({})))
}
