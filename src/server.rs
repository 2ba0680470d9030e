//! HTTP server initialization and runtime setup.
//!
//! Builds the provider adapters, probes and cache, then runs the Axum server
//! until Ctrl+C.

use crate::application::services::{AnalysisService, AuthService, Credentials, PromptGenerator, ProviderProbe};
use crate::config::{AnalysisConfig, AuthConfig, Config};
use crate::domain::generators::TextGenerator;
use crate::infrastructure::cache::{AnalysisCache, MemoryCache, RedisCache};
use crate::infrastructure::providers::{GeminiGenerator, OpenAiGenerator, http_client};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the analysis service from provider settings.
///
/// Shared by the server and the `probe` CLI so both analyze identically.
///
/// # Errors
///
/// Returns an error if a configured catalog file cannot be loaded.
pub fn build_analysis_service(config: &AnalysisConfig) -> Result<AnalysisService> {
    let catalog = config.load_catalog()?;
    let prompts = Arc::new(PromptGenerator::new(Arc::new(catalog.prompts)));
    let settings = config.probe_settings();

    // transport deadline sits just above the per-call deadline
    let client = http_client(settings.call_timeout + Duration::from_secs(5));

    let generators: Vec<Arc<dyn TextGenerator>> = vec![
        Arc::new(
            OpenAiGenerator::new(client.clone(), config.openai_api_key.clone())
                .with_base_url(&config.openai_base_url)
                .with_model(&config.openai_model),
        ),
        Arc::new(
            GeminiGenerator::new(client, config.google_api_key.clone())
                .with_base_url(&config.gemini_base_url)
                .with_model(&config.gemini_model),
        ),
    ];

    let probes = generators
        .into_iter()
        .map(|generator| Arc::new(ProviderProbe::new(generator, Arc::clone(&prompts), settings)))
        .collect();

    Ok(AnalysisService::new(
        probes,
        prompts,
        Arc::new(catalog.competitors),
    ))
}

/// Builds the auth service; login stays disabled without an account.
pub fn build_auth_service(config: &AuthConfig) -> AuthService {
    let credentials = match (&config.email, &config.password_hash) {
        (Some(email), Some(password_hash)) => Some(Credentials {
            email: email.clone(),
            password_hash: password_hash.to_lowercase(),
        }),
        _ => None,
    };

    let ttl = chrono::Duration::seconds(config.session_ttl_seconds as i64);
    AuthService::new(config.signing_secret.clone(), credentials, ttl)
}

/// Connects Redis when configured, falling back to the in-memory cache.
async fn build_cache(config: &Config) -> Arc<dyn AnalysisCache> {
    let ttl = config.cache_ttl_seconds;

    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, ttl).await {
            Ok(redis) => {
                tracing::info!("Analysis cache enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
            }
        }
    }

    Arc::new(MemoryCache::new(Duration::from_secs(ttl)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let analysis_service = build_analysis_service(&config.analysis)?;
    let auth_service = Arc::new(build_auth_service(&config.auth));
    let cache = build_cache(&config).await;

    if !config.auth.login_enabled() {
        tracing::warn!("AUTH_EMAIL / AUTH_PASSWORD_HASH not set; login is disabled");
    }

    let state = AppState::new(analysis_service, auth_service, cache);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
