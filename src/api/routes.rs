//! API route configuration.

use crate::api::handlers::{
    latest_analysis_handler, login_handler, logout_handler, search_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes requiring a session, see [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST /search`            - Analyze a domain
/// - `GET  /analysis/latest`   - Re-read the caller's last analysis
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(search_handler))
        .route("/analysis/latest", get(latest_analysis_handler))
}

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /auth/login`  - Issue a session token and cookie
/// - `POST /auth/logout` - Clear the session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
}
