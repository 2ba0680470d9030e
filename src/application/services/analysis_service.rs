//! Domain analysis orchestration.

use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::probe_service::ProviderProbe;
use super::prompt_generator::PromptGenerator;
use crate::application::insights::{self, AnalysisInputs};
use crate::domain::catalog::CompetitorCatalog;
use crate::domain::entities::{DomainAnalysis, DomainName, ProviderKind, VisibilityResult};
use crate::utils::domain_validator::{DomainValidationError, validate_domain};

/// Runs every provider probe for a domain and reduces the results.
///
/// Probes are spawned as independent tasks and joined before any derived view
/// is computed. Apart from input validation the service never returns an
/// error: a probe that panics or is cancelled turns the whole analysis into
/// the all-zero fallback.
#[derive(Clone)]
pub struct AnalysisService {
    probes: Vec<Arc<ProviderProbe>>,
    prompts: Arc<PromptGenerator>,
    competitors: Arc<CompetitorCatalog>,
}

impl AnalysisService {
    /// Creates the service over the given probes.
    ///
    /// `prompts` must be the same generator the probes use so prompt rows
    /// list the prompts that were actually considered.
    pub fn new(
        probes: Vec<Arc<ProviderProbe>>,
        prompts: Arc<PromptGenerator>,
        competitors: Arc<CompetitorCatalog>,
    ) -> Self {
        Self {
            probes,
            prompts,
            competitors,
        }
    }

    /// Validates raw input and analyzes the resulting domain.
    ///
    /// # Errors
    ///
    /// Returns [`DomainValidationError`] when the input is missing, malformed
    /// or too long. No provider is contacted in that case.
    pub async fn analyze_raw(&self, raw: &str) -> Result<DomainAnalysis, DomainValidationError> {
        let domain = validate_domain(raw)?;
        Ok(self.analyze(&domain).await)
    }

    /// Analyzes an already-validated domain.
    #[instrument(skip(self, domain), fields(domain = %domain))]
    pub async fn analyze(&self, domain: &DomainName) -> DomainAnalysis {
        info!("Starting visibility analysis");

        let handles: Vec<_> = self
            .probes
            .iter()
            .map(|probe| {
                let probe = Arc::clone(probe);
                let domain = domain.clone();
                let provider = probe.provider();
                (provider, tokio::spawn(async move { probe.probe(&domain).await }))
            })
            .collect();

        let mut models = BTreeMap::new();
        for (provider, handle) in handles {
            match handle.await {
                Ok(result) => {
                    models.insert(provider, result);
                }
                Err(e) => {
                    error!(provider = provider.slug(), error = %e, "Probe task failed, returning fallback analysis");
                    metrics::counter!("analysis_fallback_total").increment(1);
                    return self.fallback(domain);
                }
            }
        }

        let analysis = self.build(domain, models);
        metrics::counter!("analyses_total").increment(1);
        info!(overall_score = analysis.overall_score, "Visibility analysis finished");
        analysis
    }

    /// Fully shaped all-zero analysis with every provider marked as errored.
    pub fn fallback(&self, domain: &DomainName) -> DomainAnalysis {
        let models = self
            .providers()
            .map(|provider| (provider, VisibilityResult::failed(provider)))
            .collect();
        self.build(domain, models)
    }

    /// Providers covered by this service, with whether each has a credential.
    pub fn provider_status(&self) -> Vec<(ProviderKind, bool)> {
        self.probes
            .iter()
            .map(|probe| (probe.provider(), probe.is_configured()))
            .collect()
    }

    /// Prompts that would be used for `domain`.
    pub fn prompts_for(&self, domain: &DomainName) -> Vec<String> {
        self.prompts.generate(domain)
    }

    /// Matched prompt category for `domain`, `None` for the generic prompts.
    pub fn category_for(&self, domain: &DomainName) -> Option<&str> {
        self.prompts.category_for(domain)
    }

    fn providers(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.probes.iter().map(|probe| probe.provider())
    }

    fn build(
        &self,
        domain: &DomainName,
        models: BTreeMap<ProviderKind, VisibilityResult>,
    ) -> DomainAnalysis {
        let prompts = self.prompts.generate(domain);
        let inputs = AnalysisInputs {
            domain: domain.clone(),
            prompts: &prompts,
            models,
            peers: self.competitors.peers_for(domain.as_str()),
            today: Utc::now().date_naive(),
        };
        insights::assemble(inputs, &mut rand::rng())
    }
}
