//! Validated domain name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::domain_validator::{DomainValidationError, validate_domain};

/// A normalized hostname identifying the brand being analyzed.
///
/// Always lower-case, without scheme or leading `www.`, and matching the
/// hostname grammar enforced by [`validate_domain`]. The only way to obtain
/// one is through validation, so downstream code never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

impl DomainName {
    /// Validates and normalizes raw user input.
    ///
    /// # Errors
    ///
    /// See [`validate_domain`].
    pub fn parse(raw: &str) -> Result<Self, DomainValidationError> {
        validate_domain(raw)
    }

    /// Wraps an already-normalized hostname. Only the validator calls this.
    pub(crate) fn from_normalized(normalized: String) -> Self {
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The substring before the first dot (`"stripe"` for `"stripe.com"`).
    pub fn leading_label(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_domain(&value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0
    }
}
