//! Syntactic validation and normalization of user-supplied domains.
//!
//! No DNS resolution or network lookups are performed.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::DomainName;

/// Longest hostname accepted, per RFC 1035.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Labels of `[a-z0-9-]` (1-63 chars, no leading/trailing hyphen) followed by
/// a TLD of two or more letters, optionally a two-part TLD such as `co.uk`.
static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,}|[a-z]{2,}\.[a-z]{2,})$")
        .unwrap()
});

/// Errors that can occur while validating a domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainValidationError {
    #[error("Domain is required")]
    Missing,

    #[error("Invalid domain format: '{0}'")]
    Malformed(String),

    #[error("Domain must be at most {max} characters")]
    TooLong { max: usize },
}

impl DomainValidationError {
    /// Machine-readable reason reported in API error details.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Missing => "missing_domain",
            Self::Malformed(_) => "malformed_domain",
            Self::TooLong { .. } => "domain_too_long",
        }
    }
}

/// Normalizes and validates a raw domain string.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. Input is lower-cased
/// 3. A leading `http://` or `https://` scheme is removed
/// 4. A leading `www.` label is removed
///
/// # Errors
///
/// Returns [`DomainValidationError::Missing`] for empty input (checked before
/// any pattern matching), [`DomainValidationError::TooLong`] past
/// [`MAX_DOMAIN_LENGTH`], and [`DomainValidationError::Malformed`] when the
/// normalized value is not a hostname.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_domain("HTTPS://WWW.Example.COM")?.as_str(), "example.com");
/// assert!(validate_domain("not a domain").is_err());
/// ```
pub fn validate_domain(raw: &str) -> Result<DomainName, DomainValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainValidationError::Missing);
    }

    let lowered = trimmed.to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let normalized = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);

    if normalized.len() > MAX_DOMAIN_LENGTH {
        return Err(DomainValidationError::TooLong {
            max: MAX_DOMAIN_LENGTH,
        });
    }

    if !HOSTNAME_REGEX.is_match(normalized) {
        return Err(DomainValidationError::Malformed(trimmed.to_string()));
    }

    Ok(DomainName::from_normalized(normalized.to_string()))
}
