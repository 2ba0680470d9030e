//! Per-provider visibility result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An external text-generation service queried with prompts.
///
/// Declaration order is the fixed provider order used for attribution
/// ("first provider shown in") and for highlight evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat-completion model.
    ChatGpt,
    /// Google generative-text model.
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::ChatGpt, ProviderKind::Gemini];

    /// Human-readable provider name used in notes and highlights.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ChatGpt => "ChatGPT",
            Self::Gemini => "Gemini",
        }
    }

    /// Stable lowercase identifier used in JSON keys, logs and metric labels.
    pub fn slug(self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Gemini => "gemini",
        }
    }

    /// Probability that an illustrative peer brand is shown as visible on this provider.
    pub fn peer_visibility_odds(self) -> f64 {
        match self {
            Self::ChatGpt => 0.7,
            Self::Gemini => 0.6,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How a provider probe finished.
///
/// Separates "the domain is genuinely absent" (`Ok` with score 0) from the
/// failure modes that also produce a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeStatus {
    /// At least one generation call succeeded.
    Ok,
    /// The provider credential is absent; no call was made.
    NoCredential,
    /// Every generation call failed or timed out.
    CallError,
    /// The probe itself failed unexpectedly.
    Error,
}

/// Outcome of probing one provider for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityResult {
    pub provider: ProviderKind,
    pub visible: bool,
    /// Bounded visibility score in `0..=100`.
    pub score: u8,
    pub mentions: u32,
    /// One truncated excerpt per response that mentioned the domain.
    pub excerpts: Vec<String>,
    pub status: ProbeStatus,
    pub status_note: String,
}

impl VisibilityResult {
    /// Result for a provider whose credential is not configured.
    pub fn no_credential(provider: ProviderKind) -> Self {
        Self::zero(provider, ProbeStatus::NoCredential, "credential not configured")
    }

    /// Result for a provider whose probe failed unexpectedly.
    pub fn failed(provider: ProviderKind) -> Self {
        Self::zero(provider, ProbeStatus::Error, "error")
    }

    fn zero(provider: ProviderKind, status: ProbeStatus, note: &str) -> Self {
        Self {
            provider,
            visible: false,
            score: 0,
            mentions: 0,
            excerpts: Vec::new(),
            status,
            status_note: note.to_string(),
        }
    }
}
