//! # Cited
//!
//! An AI visibility service: it asks large-language-model providers
//! domain-relevant questions and scores how often a brand's domain shows up
//! in the answers.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, lookup catalogs and the provider capability trait
//! - **Application Layer** ([`application`]) - Probing, scoring and derived insights
//! - **Infrastructure Layer** ([`infrastructure`]) - Provider HTTP adapters and the analysis cache
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Pipeline
//!
//! 1. The raw domain is normalized and validated
//! 2. Five category prompts are selected; the first three are sent to each provider
//! 3. Providers are probed concurrently, one attempt per prompt with a deadline
//! 4. Responses are scanned for mentions under several surface forms
//! 5. Scores are aggregated and trend, prompt rows, competitors and highlights derived
//!
//! ## Quick Start
//!
//! ```bash
//! export AUTH_SIGNING_SECRET="change-me"
//! export OPENAI_API_KEY="sk-..."      # Optional
//! export GOOGLE_API_KEY="..."         # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnalysisService, AuthService, ProbeSettings, PromptGenerator, ProviderProbe,
    };
    pub use crate::domain::entities::{
        DomainAnalysis, DomainName, ProbeStatus, ProviderKind, VisibilityResult,
    };
    pub use crate::domain::generators::{ProviderError, TextGenerator};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
