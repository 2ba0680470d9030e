#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use axum_test::TestServer;
use chrono::Duration;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cited::api::handlers::{
    health_handler, latest_analysis_handler, login_handler, logout_handler, search_handler,
};
use cited::api::middleware::auth;
use cited::application::services::auth_service::hash_password;
use cited::application::services::{
    AnalysisService, AuthService, Credentials, ProbeSettings, PromptGenerator, ProviderProbe,
};
use cited::domain::catalog::CompetitorCatalog;
use cited::domain::entities::ProviderKind;
use cited::domain::generators::{ProviderError, TextGenerator};
use cited::infrastructure::cache::{AnalysisCache, MemoryCache};
use cited::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Replies with a fixed script, one entry per call, repeating the last one.
pub struct ScriptedGenerator {
    provider: ProviderKind,
    replies: Vec<Result<String, ()>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(provider: ProviderKind, replies: &[&str]) -> Self {
        Self {
            provider,
            replies: replies.iter().map(|r| Ok(r.to_string())).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with a 500 from the provider.
    pub fn failing(provider: ProviderKind) -> Self {
        Self {
            provider,
            replies: vec![Err(())],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn has_credential(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .get(n)
            .or_else(|| self.replies.last())
            .cloned()
            .unwrap_or(Ok(String::new()));

        reply.map_err(|_| ProviderError::Api {
            status: 500,
            message: "upstream error".to_string(),
        })
    }
}

/// A generator whose credential is not configured.
pub struct UnconfiguredGenerator(pub ProviderKind);

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    fn provider(&self) -> ProviderKind {
        self.0
    }

    fn has_credential(&self) -> bool {
        false
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::MissingCredential(self.0))
    }
}

/// A generator that panics inside the probe task.
pub struct PanickingGenerator(pub ProviderKind);

#[async_trait]
impl TextGenerator for PanickingGenerator {
    fn provider(&self) -> ProviderKind {
        self.0
    }

    fn has_credential(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        panic!("provider adapter bug");
    }
}

/// Answers every call with the same reply after a fixed delay.
pub struct SlowGenerator {
    provider: ProviderKind,
    delay: std::time::Duration,
    reply: String,
}

impl SlowGenerator {
    pub fn new(provider: ProviderKind, delay: std::time::Duration, reply: &str) -> Self {
        Self {
            provider,
            delay,
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for SlowGenerator {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn has_credential(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }
}

pub fn analysis_service(generators: Vec<Arc<dyn TextGenerator>>) -> AnalysisService {
    let prompts = Arc::new(PromptGenerator::default());
    let probes = generators
        .into_iter()
        .map(|generator| {
            Arc::new(ProviderProbe::new(
                generator,
                Arc::clone(&prompts),
                ProbeSettings::default(),
            ))
        })
        .collect();
    AnalysisService::new(probes, prompts, Arc::new(CompetitorCatalog::default()))
}

/// Both providers answer, only ChatGPT mentions `stripe.com`.
pub fn stripe_generators() -> Vec<Arc<dyn TextGenerator>> {
    vec![
        Arc::new(ScriptedGenerator::new(
            ProviderKind::ChatGpt,
            &[
                "Try stripe.com for online payments.",
                "Many startups pick stripe.com for cards.",
                "PayPal and Square are common choices.",
            ],
        )),
        Arc::new(ScriptedGenerator::new(
            ProviderKind::Gemini,
            &["PayPal and Square are common choices."],
        )),
    ]
}

pub fn auth_service() -> AuthService {
    AuthService::new(
        TEST_SECRET.to_string(),
        Some(Credentials {
            email: TEST_EMAIL.to_string(),
            password_hash: hash_password(TEST_SECRET, TEST_PASSWORD),
        }),
        Duration::hours(24),
    )
}

pub fn create_test_state(generators: Vec<Arc<dyn TextGenerator>>) -> AppState {
    create_test_state_with_cache(
        generators,
        Arc::new(MemoryCache::new(std::time::Duration::from_secs(60))),
    )
}

pub fn create_test_state_with_cache(
    generators: Vec<Arc<dyn TextGenerator>>,
    cache: Arc<dyn AnalysisCache>,
) -> AppState {
    AppState::new(
        analysis_service(generators),
        Arc::new(auth_service()),
        cache,
    )
}

/// The API routes with session auth, without rate limiting.
pub fn create_test_server(state: AppState) -> TestServer {
    let protected = Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/analysis/latest", get(latest_analysis_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .merge(protected)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Logs in with the test account and returns the session token.
pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
