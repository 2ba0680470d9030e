//! Session authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "auth_token";

/// Authenticates requests with a signed session token.
///
/// # Token Sources
///
/// ```text
/// Authorization: Bearer <token>
/// Cookie: auth_token=<token>
/// ```
///
/// The header wins when both are present. On success the verified
/// [`crate::application::services::Session`] is inserted into request
/// extensions for handlers to read.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is present, or the token is
/// malformed, forged or expired.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/search", post(search_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => cookie_token(&parts.headers),
    }
    .ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Session token is missing"}),
        )
    })?;

    let session = st.auth_service.verify(&token)?;
    parts.extensions.insert(session);

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Extracts the session cookie from a `Cookie` header with several cookies.
fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}
