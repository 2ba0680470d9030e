//! Category tables driving prompt selection and competitor lookup.
//!
//! Both tables are ordered lists of keyword rules. A rule matches when any of
//! its keywords is a substring of the domain; the first matching rule in list
//! order wins and rules are never combined. The prompt table and the
//! competitor table are maintained independently, so a domain can land in
//! different categories for each.
//!
//! The built-in tables are used unless a JSON catalog is configured via
//! `CATALOG_PATH` (see [`Catalog::from_json_file`]).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder replaced by the domain's leading label in fallback prompts.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Number of prompts generated per domain. Every prompt list in a catalog
/// must hold at least this many entries.
pub const PROMPTS_PER_DOMAIN: usize = 5;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// A keyword-matched category carrying a payload list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule<T> {
    pub name: String,
    pub keywords: Vec<String>,
    pub entries: Vec<T>,
}

impl<T> CategoryRule<T> {
    /// Whether any keyword occurs in the (lower-case) domain.
    pub fn matches(&self, domain: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| domain.contains(keyword.to_lowercase().as_str()))
    }
}

fn first_match<'a, T>(rules: &'a [CategoryRule<T>], domain: &str) -> Option<&'a CategoryRule<T>> {
    rules.iter().find(|rule| rule.matches(domain))
}

/// Category prompts plus generic fallback templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptCatalog {
    pub categories: Vec<CategoryRule<String>>,
    /// Templates containing [`NAME_PLACEHOLDER`].
    pub fallback: Vec<String>,
}

impl PromptCatalog {
    pub fn match_category(&self, domain: &str) -> Option<&CategoryRule<String>> {
        first_match(&self.categories, domain)
    }
}

/// A peer brand with the baseline score it is displayed around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerBrand {
    pub name: String,
    pub baseline: u8,
}

impl PeerBrand {
    fn new(name: &str, baseline: u8) -> Self {
        Self {
            name: name.to_string(),
            baseline,
        }
    }
}

/// Category peers plus generic placeholder competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorCatalog {
    pub categories: Vec<CategoryRule<PeerBrand>>,
    pub fallback: Vec<PeerBrand>,
}

impl CompetitorCatalog {
    /// Peers of the first matching category, or the fallback list.
    pub fn peers_for(&self, domain: &str) -> &[PeerBrand] {
        first_match(&self.categories, domain)
            .map(|rule| rule.entries.as_slice())
            .unwrap_or(&self.fallback)
    }
}

/// Both lookup tables, loadable as one JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub prompts: PromptCatalog,
    pub competitors: CompetitorCatalog,
}

impl Catalog {
    /// Loads and validates a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read, is not valid JSON,
    /// or fails [`Catalog::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json_file`].
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every rule can match, every list has entries and every
    /// prompt list can fill [`PROMPTS_PER_DOMAIN`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] naming the offending rule.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.prompts.fallback.len() < PROMPTS_PER_DOMAIN {
            return Err(CatalogError::Invalid(format!(
                "prompt fallback list needs at least {} templates, found {}",
                PROMPTS_PER_DOMAIN,
                self.prompts.fallback.len()
            )));
        }

        for rule in &self.prompts.categories {
            check_rule(rule, "prompt")?;
            if rule.entries.len() < PROMPTS_PER_DOMAIN {
                return Err(CatalogError::Invalid(format!(
                    "prompt category '{}' needs at least {} prompts, found {}",
                    rule.name,
                    PROMPTS_PER_DOMAIN,
                    rule.entries.len()
                )));
            }
        }
        for rule in &self.competitors.categories {
            check_rule(rule, "competitor")?;
        }

        Ok(())
    }
}

fn check_rule<T>(rule: &CategoryRule<T>, table: &str) -> Result<(), CatalogError> {
    if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(CatalogError::Invalid(format!(
            "{table} category '{}' needs non-empty keywords",
            rule.name
        )));
    }
    if rule.entries.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "{table} category '{}' has no entries",
            rule.name
        )));
    }
    Ok(())
}

fn prompt_rule(name: &str, keywords: &[&str], prompts: &[&str]) -> CategoryRule<String> {
    CategoryRule {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        entries: prompts.iter().map(|p| p.to_string()).collect(),
    }
}

fn peer_rule(name: &str, keywords: &[&str], peers: Vec<PeerBrand>) -> CategoryRule<PeerBrand> {
    CategoryRule {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        entries: peers,
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                prompt_rule(
                    "esports",
                    &["hltv", "cs", "counter-strike"],
                    &[
                        "What are the top Counter-Strike esports news websites?",
                        "Where can I find CS:GO tournament results and match schedules?",
                        "What are the best CS2 news and coverage sites?",
                        "Where do pro Counter-Strike players get their news and updates?",
                        "What are the leading CS:GO esports news platforms?",
                    ],
                ),
                prompt_rule(
                    "payments",
                    &["stripe", "payment"],
                    &[
                        "What are the best payment processing platforms for e-commerce?",
                        "Best payment gateway for online businesses?",
                        "What payment APIs should I use for my website?",
                        "Top credit card processing services for startups?",
                        "Best payment solutions for SaaS companies?",
                    ],
                ),
                prompt_rule(
                    "productivity",
                    &["notion", "productivity"],
                    &[
                        "What are the best note-taking and productivity apps?",
                        "Best tools for team collaboration and project management?",
                        "What productivity software do remote teams use?",
                        "Best apps for organizing personal and work tasks?",
                        "What are the top knowledge management tools?",
                    ],
                ),
                prompt_rule(
                    "ai",
                    &["openai", "ai"],
                    &[
                        "What are the best AI platforms for developers?",
                        "Best AI APIs for building applications?",
                        "What AI services should I use for my project?",
                        "Top tools for natural language processing?",
                        "Best AI models for text generation?",
                    ],
                ),
                prompt_rule(
                    "code-hosting",
                    &["github", "dev"],
                    &[
                        "What are the best code hosting and collaboration platforms?",
                        "Best tools for version control and CI/CD?",
                        "What developer tools should I use?",
                        "Best platforms for open source projects?",
                        "Top code repository management solutions?",
                    ],
                ),
            ],
            fallback: vec![
                "What is {name} and what services do they offer?".to_string(),
                "Is {name} a reliable platform for businesses?".to_string(),
                "What are the alternatives to {name}?".to_string(),
                "How does {name} compare to other similar services?".to_string(),
                "What are the pros and cons of using {name}?".to_string(),
            ],
        }
    }
}

impl Default for CompetitorCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                peer_rule(
                    "payments",
                    &["stripe", "payment"],
                    vec![
                        PeerBrand::new("PayPal", 85),
                        PeerBrand::new("Square", 78),
                        PeerBrand::new("Razorpay", 65),
                        PeerBrand::new("Adyen", 72),
                    ],
                ),
                peer_rule(
                    "productivity",
                    &["notion", "productivity"],
                    vec![
                        PeerBrand::new("Airtable", 82),
                        PeerBrand::new("Monday.com", 75),
                        PeerBrand::new("Trello", 88),
                        PeerBrand::new("Asana", 80),
                    ],
                ),
                peer_rule(
                    "ai",
                    &["openai", "ai"],
                    vec![
                        PeerBrand::new("Anthropic", 90),
                        PeerBrand::new("Google AI", 85),
                        PeerBrand::new("Hugging Face", 70),
                        PeerBrand::new("Cohere", 65),
                    ],
                ),
                peer_rule(
                    "code-hosting",
                    &["github", "dev"],
                    vec![
                        PeerBrand::new("GitLab", 75),
                        PeerBrand::new("Bitbucket", 60),
                        PeerBrand::new("Azure DevOps", 55),
                        PeerBrand::new("SourceForge", 40),
                    ],
                ),
                peer_rule(
                    "ecommerce",
                    &["shopify", "ecommerce"],
                    vec![
                        PeerBrand::new("WooCommerce", 80),
                        PeerBrand::new("BigCommerce", 70),
                        PeerBrand::new("Magento", 65),
                        PeerBrand::new("Squarespace", 60),
                    ],
                ),
                peer_rule(
                    "gaming",
                    &["hltv", "gaming"],
                    vec![
                        PeerBrand::new("ESL", 85),
                        PeerBrand::new("FACEIT", 80),
                        PeerBrand::new("ESEA", 70),
                        PeerBrand::new("GamersClub", 60),
                    ],
                ),
            ],
            fallback: vec![
                PeerBrand::new("Competitor A", 70),
                PeerBrand::new("Competitor B", 65),
                PeerBrand::new("Competitor C", 60),
                PeerBrand::new("Competitor D", 55),
            ],
        }
    }
}
