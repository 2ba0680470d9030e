//! Counting domain mentions in free-form model output.

use regex::Regex;

use crate::domain::entities::DomainName;

/// TLD suffixes removed to form the "bare" variation.
const STRIPPED_TLDS: [&str; 4] = [".com", ".org", ".net", ".io"];

/// Counts occurrences of a domain under several surface forms.
///
/// # Variations
///
/// For `www.stripe.com`-style input the scanner looks for:
///
/// 1. the full domain (`stripe.com`)
/// 2. the domain without a `www.` prefix
/// 3. the leading label (`stripe`)
/// 4. the domain with a common TLD removed (`stripe`)
///
/// Identical variations are matched once. Different variations that hit the
/// same occurrence are each counted, so `stripe.com` in a response counts for
/// both `stripe.com` and `stripe`. Variations of one character are skipped.
///
/// Matching is case-insensitive and anchored on word boundaries, so
/// `exampleXYZ` is not a mention of `example`.
#[derive(Debug, Clone)]
pub struct MentionScanner {
    patterns: Vec<(String, Regex)>,
}

impl MentionScanner {
    /// Compiles the variation patterns for `domain`.
    pub fn new(domain: &DomainName) -> Self {
        let patterns = Self::variations(domain.as_str())
            .into_iter()
            .filter(|variation| variation.chars().count() > 1)
            .filter_map(|variation| {
                let pattern = format!(r"\b{}\b", regex::escape(&variation));
                Regex::new(&pattern).ok().map(|regex| (variation, regex))
            })
            .collect();

        Self { patterns }
    }

    /// The de-duplicated surface forms searched for, in evaluation order.
    pub fn variations(domain: &str) -> Vec<String> {
        let full = domain.to_lowercase();
        let without_www = full.strip_prefix("www.").unwrap_or(&full).to_string();
        let leading_label = full.split('.').next().unwrap_or(&full).to_string();
        let without_tld = STRIPPED_TLDS
            .iter()
            .find_map(|tld| without_www.strip_suffix(tld))
            .unwrap_or(&without_www)
            .to_string();

        let mut variations: Vec<String> = Vec::with_capacity(4);
        for candidate in [full, without_www, leading_label, without_tld] {
            if !candidate.is_empty() && !variations.contains(&candidate) {
                variations.push(candidate);
            }
        }
        variations
    }

    /// Total mentions across all variations.
    pub fn count(&self, text: &str) -> u32 {
        self.breakdown(text).iter().map(|(_, count)| count).sum()
    }

    /// Per-variation match counts, in evaluation order.
    pub fn breakdown(&self, text: &str) -> Vec<(&str, u32)> {
        let lowered = text.to_lowercase();
        self.patterns
            .iter()
            .map(|(variation, regex)| {
                let count = regex.find_iter(&lowered).count() as u32;
                (variation.as_str(), count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(raw: &str) -> DomainName {
        DomainName::parse(raw).unwrap()
    }

    #[test]
    fn test_word_boundary_rejects_embedded_label() {
        let scanner = MentionScanner::new(&domain("example.com"));
        let breakdown = scanner.breakdown("I love Example.com and exampleXYZ");

        assert_eq!(breakdown, vec![("example.com", 1), ("example", 1)]);
        // the "example" hit is the one inside "Example.com", not "exampleXYZ"
        assert_eq!(scanner.count("only exampleXYZ here"), 0);
        assert_eq!(scanner.count("I love Example.com and exampleXYZ"), 2);
    }

    #[test]
    fn test_case_insensitive() {
        let scanner = MentionScanner::new(&domain("stripe.com"));
        assert_eq!(scanner.count("STRIPE is great. Stripe rocks."), 2);
    }

    #[test]
    fn test_bare_label_counts_without_tld() {
        let scanner = MentionScanner::new(&domain("notion.so"));
        // ".so" is not a stripped TLD, so the bare form comes from the leading label.
        assert_eq!(MentionScanner::variations("notion.so"), vec!["notion.so", "notion"]);
        assert_eq!(scanner.count("Try Notion for notes."), 1);
    }

    #[test]
    fn test_overlapping_variations_double_count() {
        let scanner = MentionScanner::new(&domain("stripe.com"));
        // one occurrence of stripe.com counts for "stripe.com" and "stripe"
        assert_eq!(scanner.count("Visit stripe.com today"), 2);
    }

    #[test]
    fn test_subdomain_variations() {
        assert_eq!(
            MentionScanner::variations("docs.github.io"),
            vec!["docs.github.io", "docs", "docs.github"]
        );
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let scanner = MentionScanner::new(&domain("example.com"));
        // "." must not match arbitrary characters
        assert_eq!(scanner.breakdown("examplexcom")[0], ("example.com", 0));
    }

    #[test]
    fn test_single_char_variations_skipped() {
        let scanner = MentionScanner::new(&domain("x.io"));
        assert_eq!(scanner.count("x marks the spot"), 0);
        assert_eq!(scanner.count("see x.io"), 1);
    }

    #[test]
    fn test_no_mentions() {
        let scanner = MentionScanner::new(&domain("hltv.org"));
        assert_eq!(scanner.count("Nothing relevant here."), 0);
    }
}
