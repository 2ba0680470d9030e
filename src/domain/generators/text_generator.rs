//! Provider capability trait: "generate text given a prompt".

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::ProviderKind;

/// Provider-specific failures, normalized at the adapter boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Credential absent; detectable before any call is made.
    #[error("{0} credential is not configured")]
    MissingCredential(ProviderKind),

    /// Connection failed or the transport gave up.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response (rate limit, invalid request, server error).
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The provider answered without any candidate text.
    #[error("Provider returned no text")]
    EmptyResponse,

    /// The per-call deadline elapsed.
    #[error("Call timed out after {0:?}")]
    Timeout(Duration),
}

impl ProviderError {
    /// Short label used for the `outcome` metric dimension.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "no_credential",
            Self::Network(_) => "network_error",
            Self::Api { .. } => "api_error",
            Self::Parse(_) => "parse_error",
            Self::EmptyResponse => "empty_response",
            Self::Timeout(_) => "timeout",
        }
    }
}

/// An external text-generation service.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::OpenAiGenerator`] - chat completions
/// - [`crate::infrastructure::providers::GeminiGenerator`] - generateContent
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Which provider this generator talks to.
    fn provider(&self) -> ProviderKind;

    /// Pre-flight check: whether a credential is configured.
    fn has_credential(&self) -> bool;

    /// Issues a single generation request for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingCredential`] if called without a
    /// credential, otherwise the normalized per-call failure.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
