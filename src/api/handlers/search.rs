//! Handler for the domain search endpoint.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::search::SearchRequest;
use crate::application::services::Session;
use crate::domain::entities::DomainAnalysis;
use crate::error::AppError;
use crate::state::AppState;

/// Analyzes a domain across all configured providers.
///
/// # Endpoint
///
/// `POST /api/search` (session required)
///
/// # Request Body
///
/// ```json
/// { "domain": "https://www.stripe.com" }
/// ```
///
/// # Response
///
/// The full analysis: overall score, one result per provider, trend,
/// prompt rows, competitors and highlights. Provider failures degrade into
/// zero scores inside a normal `200` response; this can take 30-60 seconds.
///
/// The result is stored as the caller's latest analysis. A cache failure is
/// logged and does not fail the request.
///
/// # Errors
///
/// Returns 400 Bad Request with `details.reason` of `missing_domain`,
/// `malformed_domain` or `domain_too_long`.
pub async fn search_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<DomainAnalysis>, AppError> {
    payload.validate()?;

    let raw = payload.domain.unwrap_or_default();
    let analysis = state.analysis_service.analyze_raw(&raw).await?;

    if let Err(e) = state.cache.store_latest(&session.email, &analysis).await {
        tracing::warn!(user = %session.email, error = %e, "Failed to store latest analysis");
    }

    Ok(Json(analysis))
}
