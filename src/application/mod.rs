//! Application layer implementing the probing and scoring pipeline.
//!
//! Services consume the domain traits and expose a small API to the HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::prompt_generator::PromptGenerator`] - Domain-relevant test prompts
//! - [`services::mention_scanner::MentionScanner`] - Mention counting over surface forms
//! - [`services::probe_service::ProviderProbe`] - One provider, one domain, one score
//! - [`services::analysis_service::AnalysisService`] - Concurrent probes and aggregation
//! - [`services::auth_service::AuthService`] - Dashboard login and session tokens
//!
//! Derived views (trend, prompt rows, competitors, highlights) live in [`insights`].

pub mod insights;
pub mod services;
