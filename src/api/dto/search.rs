//! DTOs for the domain search endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to analyze a domain.
///
/// `domain` is optional at the JSON level so that a missing field and an
/// empty string both surface as the same `missing_domain` error.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    /// Raw user input, e.g. `"https://www.Stripe.com"`.
    #[validate(length(max = 2048, message = "Input is too long"))]
    pub domain: Option<String>,
}
