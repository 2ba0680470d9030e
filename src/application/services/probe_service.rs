//! Probing a single provider for a single domain.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::mention_scanner::MentionScanner;
use super::prompt_generator::PromptGenerator;
use crate::domain::entities::{DomainName, ProbeStatus, ProviderKind, VisibilityResult};
use crate::domain::generators::{ProviderError, TextGenerator};
use crate::utils::text::truncate_chars;

/// Longest excerpt kept per mentioning response, in characters.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Tunables for a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// How many of the generated prompts are actually sent.
    pub prompts_per_probe: usize,
    /// Score points added per raw mention.
    pub mention_weight: u32,
    /// Deadline for a single generation call.
    pub call_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            prompts_per_probe: 3,
            mention_weight: 5,
            call_timeout: Duration::from_secs(45),
        }
    }
}

/// Computes the bounded visibility score for one provider.
///
/// Rewards breadth (share of probed prompts whose answer mentioned the
/// domain) and depth (raw mention volume), capped at 100. Zero whenever no
/// response mentioned the domain.
///
/// # Examples
///
/// ```ignore
/// // 2 of 3 prompts, 4 mentions, weight 5: 66.7 + 20 = 86.7
/// assert_eq!(visibility_score(2, 4, 3, 5), 87);
/// ```
pub fn visibility_score(
    responded_with_mention: u32,
    total_mentions: u32,
    prompts_probed: u32,
    mention_weight: u32,
) -> u8 {
    if responded_with_mention == 0 || prompts_probed == 0 {
        return 0;
    }

    let breadth = f64::from(responded_with_mention) / f64::from(prompts_probed) * 100.0;
    let depth = f64::from(total_mentions) * f64::from(mention_weight);
    (breadth + depth).clamp(0.0, 100.0).round() as u8
}

/// Running totals while the prompts of one probe are processed.
#[derive(Debug, Default)]
struct ProbeTally {
    probed: u32,
    failed: u32,
    responded_with_mention: u32,
    total_mentions: u32,
    excerpts: Vec<String>,
}

impl ProbeTally {
    fn record_response(&mut self, text: &str, mentions: u32) {
        if mentions > 0 {
            self.total_mentions += mentions;
            self.responded_with_mention += 1;
            self.excerpts.push(truncate_chars(text, EXCERPT_MAX_CHARS));
        }
    }

    /// Breadth is measured against the configured prompt count, not against
    /// how many prompts the catalog could supply.
    fn into_result(self, provider: ProviderKind, settings: &ProbeSettings) -> VisibilityResult {
        let visible = self.responded_with_mention > 0;
        let score = visibility_score(
            self.responded_with_mention,
            self.total_mentions,
            settings.prompts_per_probe as u32,
            settings.mention_weight,
        );

        let all_failed = self.probed > 0 && self.failed == self.probed;
        let (status, mut note) = if all_failed {
            (
                ProbeStatus::CallError,
                format!("all {} provider calls failed", self.probed),
            )
        } else if visible {
            (ProbeStatus::Ok, "Domain found in responses".to_string())
        } else {
            (ProbeStatus::Ok, "Domain not found".to_string())
        };
        if !all_failed && self.failed > 0 {
            note.push_str(&format!(" ({} of {} calls failed)", self.failed, self.probed));
        }

        VisibilityResult {
            provider,
            visible,
            score,
            mentions: self.total_mentions,
            excerpts: self.excerpts,
            status,
            status_note: note,
        }
    }
}

/// Runs prompts against one provider and scores the mentions it returns.
///
/// Calls are issued one at a time with a single attempt each. A failed or
/// timed-out call contributes zero mentions and the remaining prompts still
/// run, so a slow provider only delays its own probe.
pub struct ProviderProbe {
    generator: Arc<dyn TextGenerator>,
    prompts: Arc<PromptGenerator>,
    settings: ProbeSettings,
}

impl ProviderProbe {
    /// Creates a probe for the provider behind `generator`.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        prompts: Arc<PromptGenerator>,
        settings: ProbeSettings,
    ) -> Self {
        Self {
            generator,
            prompts,
            settings,
        }
    }

    pub fn provider(&self) -> ProviderKind {
        self.generator.provider()
    }

    /// Whether the backing provider has a credential configured.
    pub fn is_configured(&self) -> bool {
        self.generator.has_credential()
    }

    /// Probes the provider for `domain`.
    ///
    /// Never fails: a missing credential yields a `no-credential` result and
    /// per-call errors are absorbed into the score.
    pub async fn probe(&self, domain: &DomainName) -> VisibilityResult {
        let provider = self.provider();

        if !self.generator.has_credential() {
            warn!(provider = provider.slug(), "Provider credential not configured");
            metrics::counter!(
                "provider_calls_total",
                "provider" => provider.slug(),
                "outcome" => "no_credential"
            )
            .increment(1);
            return VisibilityResult::no_credential(provider);
        }

        let scanner = MentionScanner::new(domain);
        let prompts = self.prompts.generate(domain);
        let mut tally = ProbeTally::default();

        info!(
            provider = provider.slug(),
            domain = %domain,
            prompts = prompts.len().min(self.settings.prompts_per_probe),
            "Probing provider"
        );

        for prompt in prompts.iter().take(self.settings.prompts_per_probe) {
            tally.probed += 1;
            match self.call(prompt).await {
                Ok(text) => {
                    let mentions = scanner.count(&text);
                    debug!(
                        provider = provider.slug(),
                        prompt = %prompt,
                        mentions,
                        preview = %truncate_chars(&text, 100),
                        "Scanned response"
                    );
                    tally.record_response(&text, mentions);
                }
                Err(e) => {
                    warn!(provider = provider.slug(), prompt = %prompt, error = %e, "Provider call failed");
                    tally.failed += 1;
                }
            }
        }

        let result = tally.into_result(provider, &self.settings);
        info!(
            provider = provider.slug(),
            domain = %domain,
            score = result.score,
            mentions = result.mentions,
            status = ?result.status,
            "Probe finished"
        );
        result
    }

    /// One single-attempt call bounded by the configured timeout.
    async fn call(&self, prompt: &str) -> Result<String, ProviderError> {
        let started = Instant::now();
        let outcome = tokio::time::timeout(self.settings.call_timeout, self.generator.generate(prompt))
            .await
            .unwrap_or(Err(ProviderError::Timeout(self.settings.call_timeout)));

        let label = match &outcome {
            Ok(_) => "ok",
            Err(e) => e.outcome_label(),
        };
        metrics::counter!(
            "provider_calls_total",
            "provider" => self.provider().slug(),
            "outcome" => label
        )
        .increment(1);
        debug!(
            provider = self.provider().slug(),
            duration_ms = started.elapsed().as_millis() as u64,
            outcome = label,
            "Provider call completed"
        );

        outcome
    }
}
