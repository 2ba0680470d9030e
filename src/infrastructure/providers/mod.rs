//! HTTP adapters for the text-generation providers.
//!
//! Each adapter normalizes transport, status and decoding failures into
//! [`ProviderError`] so the probe never sees provider-specific errors.

pub mod gemini;
pub mod openai;

pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;

use std::time::Duration;

use crate::domain::generators::ProviderError;

/// Builds the shared HTTP client with a transport-level timeout.
///
/// The probe applies its own per-call deadline; this one bounds connection
/// setup and stalled reads underneath it.
pub fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}

/// Turns a non-success response into [`ProviderError::Api`].
async fn api_error(provider: &str, response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    tracing::warn!(provider, status = %status, error = %error_text, "Provider API error");
    ProviderError::Api {
        status: status.as_u16(),
        message: error_text,
    }
}

fn network_error(provider: &str, e: reqwest::Error) -> ProviderError {
    tracing::warn!(provider, error = %e, "Provider request failed");
    ProviderError::Network(e.to_string())
}
