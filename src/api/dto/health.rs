//! DTOs for the health endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Keyed by provider slug (`chatgpt`, `gemini`).
    pub providers: BTreeMap<String, CheckStatus>,
    pub cache: CheckStatus,
}

/// Status of one component plus an optional human-readable note.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    fn new(status: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            message: Some(message.into()),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new("ok", message)
    }

    /// Present but not usable; does not degrade the service.
    pub fn unconfigured(message: impl Into<String>) -> Self {
        Self::new("unconfigured", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
