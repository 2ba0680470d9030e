//! Derived views over a set of per-provider results.
//!
//! Everything here is a function of the probe results plus an explicit random
//! source and date, so callers can pin both in tests. Views are recomputed on
//! every analysis and never stored separately from the results they read.

pub mod competitors;
pub mod highlights;
pub mod prompt_rows;
pub mod trend;

use chrono::NaiveDate;
use rand::Rng;
use std::collections::BTreeMap;

use crate::domain::catalog::PeerBrand;
use crate::domain::entities::{DomainAnalysis, DomainName, ProviderKind, VisibilityResult};

pub use competitors::competitor_table;
pub use highlights::highlights;
pub use prompt_rows::prompt_rows;
pub use trend::synthetic_trend;

/// Rounded mean of the provider scores; zero for an empty set.
pub fn overall_score<'a>(results: impl IntoIterator<Item = &'a VisibilityResult>) -> u8 {
    let (sum, count) = results
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), result| {
            (sum + u32::from(result.score), count + 1)
        });
    if count == 0 {
        return 0;
    }
    (f64::from(sum) / f64::from(count)).round() as u8
}

/// Inputs shared by every derived view.
pub struct AnalysisInputs<'a> {
    pub domain: DomainName,
    pub prompts: &'a [String],
    pub models: BTreeMap<ProviderKind, VisibilityResult>,
    pub peers: &'a [PeerBrand],
    pub today: NaiveDate,
}

/// Reduces the per-provider results into a complete analysis.
pub fn assemble<R: Rng + ?Sized>(inputs: AnalysisInputs<'_>, rng: &mut R) -> DomainAnalysis {
    let AnalysisInputs {
        domain,
        prompts,
        models,
        peers,
        today,
    } = inputs;

    let overall = overall_score(models.values());
    let ordered: Vec<&VisibilityResult> = models.values().collect();

    let trends = synthetic_trend(overall, today, rng);
    let prompt_rows = prompt_rows(prompts, &domain, models.values(), today);
    let competitors = competitor_table(&domain, overall, models.values(), peers, rng);
    let highlights = highlights(&ordered);

    DomainAnalysis {
        domain,
        overall_score: overall,
        models,
        trends,
        prompts: prompt_rows,
        competitors,
        highlights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProbeStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scored(provider: ProviderKind, score: u8) -> VisibilityResult {
        VisibilityResult {
            provider,
            visible: score > 0,
            score,
            mentions: 0,
            excerpts: Vec::new(),
            status: ProbeStatus::Ok,
            status_note: String::new(),
        }
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        let results = [scored(ProviderKind::ChatGpt, 87), scored(ProviderKind::Gemini, 0)];
        assert_eq!(overall_score(&results), 44);

        let results = [scored(ProviderKind::ChatGpt, 100), scored(ProviderKind::Gemini, 100)];
        assert_eq!(overall_score(&results), 100);

        assert_eq!(overall_score(std::iter::empty()), 0);
    }

    #[test]
    fn test_assemble_all_zero() {
        let models: BTreeMap<_, _> = ProviderKind::ALL
            .iter()
            .map(|&p| (p, VisibilityResult::failed(p)))
            .collect();
        let prompts: Vec<String> = vec!["a".into(), "b".into()];
        let mut rng = StdRng::seed_from_u64(5);

        let analysis = assemble(
            AnalysisInputs {
                domain: DomainName::parse("example.com").unwrap(),
                prompts: &prompts,
                models,
                peers: &[],
                today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            },
            &mut rng,
        );

        assert_eq!(analysis.overall_score, 0);
        assert!(analysis.trends.iter().all(|t| t.score == 0));
        assert_eq!(analysis.prompts.len(), 2);
        assert_eq!(analysis.competitors.len(), 1);
        assert_eq!(analysis.competitors[0].score, 0);
        assert!(!analysis.highlights.is_empty());
    }
}
