//! Handler for re-reading the latest analysis.

use axum::{Extension, Json, extract::State};
use serde_json::json;

use crate::application::services::Session;
use crate::domain::entities::DomainAnalysis;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the caller's most recent analysis.
///
/// # Endpoint
///
/// `GET /api/analysis/latest` (session required)
///
/// # Errors
///
/// Returns 404 Not Found if no analysis is stored for the caller, including
/// after expiry or when the cache backend is unreachable.
pub async fn latest_analysis_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<DomainAnalysis>, AppError> {
    let latest = state.cache.latest(&session.email).await.unwrap_or_else(|e| {
        tracing::warn!(user = %session.email, error = %e, "Failed to read latest analysis");
        None
    });

    latest.map(Json).ok_or_else(|| {
        AppError::not_found(
            "No analysis found",
            json!({"reason": "Run a search first"}),
        )
    })
}
