//! Business logic services for the application layer.

pub mod analysis_service;
pub mod auth_service;
pub mod mention_scanner;
pub mod probe_service;
pub mod prompt_generator;

pub use analysis_service::AnalysisService;
pub use auth_service::{AuthService, Credentials, IssuedSession, Session};
pub use mention_scanner::MentionScanner;
pub use probe_service::{ProbeSettings, ProviderProbe};
pub use prompt_generator::PromptGenerator;
