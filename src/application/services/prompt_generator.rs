//! Domain-relevant test prompt selection.

use std::sync::Arc;
use tracing::debug;

use crate::domain::catalog::{NAME_PLACEHOLDER, PromptCatalog};
use crate::domain::entities::DomainName;

pub use crate::domain::catalog::PROMPTS_PER_DOMAIN;

/// Produces the ordered prompt list for a domain.
///
/// Output is a pure function of the domain and the catalog: repeated calls
/// return identical prompts, which keeps per-prompt attribution reproducible
/// between probing and the prompt rows shown afterwards.
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    catalog: Arc<PromptCatalog>,
}

impl PromptGenerator {
    /// Creates a generator over the given prompt catalog.
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }

    /// Generates up to [`PROMPTS_PER_DOMAIN`] prompts for `domain`.
    ///
    /// The first catalog category whose keywords occur in the domain supplies
    /// the prompts. Unmatched domains get the fallback templates with
    /// `{name}` replaced by the domain's leading label.
    pub fn generate(&self, domain: &DomainName) -> Vec<String> {
        if let Some(rule) = self.catalog.match_category(domain.as_str()) {
            debug!(domain = %domain, category = %rule.name, "Using category prompts");
            return rule
                .entries
                .iter()
                .take(PROMPTS_PER_DOMAIN)
                .cloned()
                .collect();
        }

        let name = domain.leading_label();
        debug!(domain = %domain, name, "Using generic prompts");
        self.catalog
            .fallback
            .iter()
            .take(PROMPTS_PER_DOMAIN)
            .map(|template| template.replace(NAME_PLACEHOLDER, name))
            .collect()
    }

    /// Name of the matched prompt category, if any.
    pub fn category_for(&self, domain: &DomainName) -> Option<&str> {
        self.catalog
            .match_category(domain.as_str())
            .map(|rule| rule.name.as_str())
    }
}

impl Default for PromptGenerator {
    fn default() -> Self {
        Self::new(Arc::new(PromptCatalog::default()))
    }
}
