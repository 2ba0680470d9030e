//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::collections::BTreeMap;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Cache healthy
/// - **503 Service Unavailable**: Cache backend unreachable
///
/// A provider without a credential is reported as `unconfigured` but does
/// not make the service degraded; its probes simply score zero.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "providers": {
///       "chatgpt": { "status": "ok", "message": "Credential configured" },
///       "gemini": { "status": "unconfigured", "message": "Credential not configured" }
///     },
///     "cache": { "status": "ok", "message": "Backend: memory" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let providers = check_providers(&state);
    let cache = check_cache(&state).await;

    let healthy = cache.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { providers, cache },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports credential presence per provider; makes no provider calls.
fn check_providers(state: &AppState) -> BTreeMap<String, CheckStatus> {
    state
        .analysis_service
        .provider_status()
        .into_iter()
        .map(|(provider, configured)| {
            let check = if configured {
                CheckStatus::ok("Credential configured")
            } else {
                CheckStatus::unconfigured("Credential not configured")
            };
            (provider.slug().to_string(), check)
        })
        .collect()
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus::ok(format!("Backend: {}", backend))
    } else {
        tracing::warn!(backend, "Cache health check failed");
        CheckStatus::error(format!("Backend {} unreachable", backend))
    }
}
