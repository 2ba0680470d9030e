//! Rule-based highlight records.

use crate::domain::entities::{Highlight, HighlightKind, VisibilityResult};

/// Provider score below which a low-visibility highlight is raised.
pub const LOW_VISIBILITY_THRESHOLD: u8 = 30;
/// Provider score every visible provider must exceed for "excellent".
pub const EXCELLENT_THRESHOLD: u8 = 70;
/// Average score above which performance is "outstanding".
pub const OUTSTANDING_AVERAGE: f64 = 80.0;
/// Average score below which visibility is "critical".
pub const CRITICAL_AVERAGE: f64 = 20.0;

/// Evaluates every rule in a fixed order and appends each that applies.
///
/// `results` must be in provider order; the low-visibility rule emits one
/// record per provider in that order. An empty slice yields no highlights.
pub fn highlights(results: &[&VisibilityResult]) -> Vec<Highlight> {
    if results.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let providers = results.len();

    for result in results {
        if result.score < LOW_VISIBILITY_THRESHOLD {
            let name = result.provider.display_name();
            out.push(Highlight::new(
                HighlightKind::VisibilityDrop,
                format!("Low {name} Visibility"),
                format!("Your domain has very low visibility in {name} responses"),
                format!("{}%", result.score),
            ));
        }
    }

    let visible = results.iter().filter(|result| result.visible).count();

    if visible == providers
        && results
            .iter()
            .all(|result| result.score > EXCELLENT_THRESHOLD)
    {
        out.push(Highlight::new(
            HighlightKind::NewCompetitor,
            "Excellent AI Visibility",
            "Your domain is highly visible across all probed AI models",
            format!("{providers}/{providers} models"),
        ));
    }

    if visible > 0 && visible < providers {
        out.push(Highlight::new(
            HighlightKind::MissedPrompt,
            "Inconsistent Visibility",
            "Your domain appears in some AI models but not others",
            format!("{visible}/{providers} models"),
        ));
    }

    let total_mentions: u32 = results.iter().map(|result| result.mentions).sum();
    if total_mentions == 0 {
        out.push(Highlight::new(
            HighlightKind::MissedPrompt,
            "No AI Mentions Found",
            "Your domain was not mentioned in any AI responses",
            "0 mentions",
        ));
    } else if total_mentions < 3 {
        out.push(Highlight::new(
            HighlightKind::MissedPrompt,
            "Low Mention Frequency",
            "Your domain has very few mentions across AI responses",
            format!("{total_mentions} mentions"),
        ));
    } else if total_mentions > 10 {
        out.push(Highlight::new(
            HighlightKind::NewCompetitor,
            "High Mention Frequency",
            "Your domain is frequently mentioned in AI responses",
            format!("{total_mentions} mentions"),
        ));
    }

    let average = results
        .iter()
        .map(|result| f64::from(result.score))
        .sum::<f64>()
        / providers as f64;
    if average > OUTSTANDING_AVERAGE {
        out.push(Highlight::new(
            HighlightKind::NewCompetitor,
            "Outstanding Performance",
            "Your domain has exceptional AI visibility scores",
            format!("{}% avg", average.round()),
        ));
    } else if average < CRITICAL_AVERAGE {
        out.push(Highlight::new(
            HighlightKind::VisibilityDrop,
            "Critical Visibility Issue",
            "Your domain has critically low AI visibility",
            format!("{}% avg", average.round()),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProbeStatus, ProviderKind};

    fn result(provider: ProviderKind, score: u8, mentions: u32) -> VisibilityResult {
        VisibilityResult {
            provider,
            visible: mentions > 0,
            score,
            mentions,
            excerpts: Vec::new(),
            status: ProbeStatus::Ok,
            status_note: String::new(),
        }
    }

    fn titles(highlights: &[Highlight]) -> Vec<&str> {
        highlights.iter().map(|h| h.title.as_str()).collect()
    }

    #[test]
    fn test_empty_results_yield_nothing() {
        assert!(highlights(&[]).is_empty());
    }

    #[test]
    fn test_mixed_visibility() {
        let a = result(ProviderKind::ChatGpt, 87, 4);
        let b = result(ProviderKind::Gemini, 0, 0);

        let out = highlights(&[&a, &b]);

        assert_eq!(
            titles(&out),
            vec!["Low Gemini Visibility", "Inconsistent Visibility"]
        );
        assert_eq!(out[0].value, "0%");
        assert_eq!(out[0].kind, HighlightKind::VisibilityDrop);
        assert_eq!(out[1].value, "1/2 models");
    }

    #[test]
    fn test_all_zero_fires_every_negative_rule() {
        let a = result(ProviderKind::ChatGpt, 0, 0);
        let b = result(ProviderKind::Gemini, 0, 0);

        let out = highlights(&[&a, &b]);

        assert_eq!(
            titles(&out),
            vec![
                "Low ChatGPT Visibility",
                "Low Gemini Visibility",
                "No AI Mentions Found",
                "Critical Visibility Issue",
            ]
        );
        assert_eq!(out[3].value, "0% avg");
    }

    #[test]
    fn test_strong_results() {
        let a = result(ProviderKind::ChatGpt, 100, 9);
        let b = result(ProviderKind::Gemini, 90, 4);

        let out = highlights(&[&a, &b]);

        assert_eq!(
            titles(&out),
            vec![
                "Excellent AI Visibility",
                "High Mention Frequency",
                "Outstanding Performance",
            ]
        );
        assert_eq!(out[0].value, "2/2 models");
        assert_eq!(out[1].value, "13 mentions");
        assert_eq!(out[2].value, "95% avg");
    }

    #[test]
    fn test_low_mention_frequency() {
        let a = result(ProviderKind::ChatGpt, 38, 1);
        let b = result(ProviderKind::Gemini, 38, 1);

        let out = highlights(&[&a, &b]);

        assert_eq!(titles(&out), vec!["Low Mention Frequency"]);
        assert_eq!(out[0].value, "2 mentions");
    }

    #[test]
    fn test_excellent_requires_every_score_above_threshold() {
        let a = result(ProviderKind::ChatGpt, 70, 3);
        let b = result(ProviderKind::Gemini, 90, 3);

        let out = highlights(&[&a, &b]);

        assert!(!titles(&out).contains(&"Excellent AI Visibility"));
    }
}
