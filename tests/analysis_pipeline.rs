mod common;

use cited::domain::entities::{DomainName, HighlightKind, ProbeStatus, ProviderKind};
use cited::domain::generators::TextGenerator;
use std::sync::Arc;
use std::time::Duration;

use common::{PanickingGenerator, ScriptedGenerator, SlowGenerator, UnconfiguredGenerator};

fn domain(raw: &str) -> DomainName {
    DomainName::parse(raw).unwrap()
}

#[tokio::test]
async fn test_stripe_end_to_end() {
    let service = common::analysis_service(common::stripe_generators());

    let analysis = service.analyze(&domain("stripe.com")).await;

    let chatgpt = &analysis.models[&ProviderKind::ChatGpt];
    assert_eq!(chatgpt.mentions, 4);
    assert_eq!(chatgpt.score, 87);
    assert!(chatgpt.visible);
    assert_eq!(chatgpt.excerpts.len(), 2);

    let gemini = &analysis.models[&ProviderKind::Gemini];
    assert_eq!(gemini.score, 0);
    assert_eq!(gemini.status, ProbeStatus::Ok);
    assert_eq!(gemini.status_note, "Domain not found");

    assert_eq!(analysis.overall_score, 44);

    let titles: Vec<&str> = analysis.highlights.iter().map(|h| h.title.as_str()).collect();
    assert!(titles.contains(&"Low Gemini Visibility"));
    assert!(titles.contains(&"Inconsistent Visibility"));

    assert_eq!(analysis.competitors[0].rank, 1);
    assert_eq!(analysis.competitors[0].brand, "stripe.com");
    assert_eq!(analysis.competitors[0].score, 44);
    assert_eq!(analysis.competitors.len(), 5);
}

#[tokio::test]
async fn test_only_three_prompts_are_sent() {
    let chatgpt = Arc::new(ScriptedGenerator::new(ProviderKind::ChatGpt, &["stripe.com"]));
    let gemini = Arc::new(ScriptedGenerator::new(ProviderKind::Gemini, &["nothing"]));
    let service = common::analysis_service(vec![
        chatgpt.clone() as Arc<dyn TextGenerator>,
        gemini.clone() as Arc<dyn TextGenerator>,
    ]);

    let analysis = service.analyze(&domain("stripe.com")).await;

    assert_eq!(chatgpt.calls(), 3);
    assert_eq!(gemini.calls(), 3);
    assert_eq!(analysis.prompts.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_slow_provider_only_delays_itself() {
    let chatgpt = Arc::new(ScriptedGenerator::new(
        ProviderKind::ChatGpt,
        &["Try stripe.com for online payments."],
    ));
    let service = common::analysis_service(vec![
        chatgpt.clone() as Arc<dyn TextGenerator>,
        Arc::new(SlowGenerator::new(
            ProviderKind::Gemini,
            Duration::from_secs(30),
            "PayPal and Square are common choices.",
        )),
    ]);

    let started = tokio::time::Instant::now();
    let analysis = service.analyze(&domain("stripe.com")).await;
    let elapsed = started.elapsed();

    // three sequential 30s calls on the slow side, nothing added by the fast one
    assert!(elapsed >= Duration::from_secs(90), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(91), "{elapsed:?}");

    assert_eq!(chatgpt.calls(), 3);
    let fast = &analysis.models[&ProviderKind::ChatGpt];
    assert!(fast.visible);
    assert_eq!(fast.status, ProbeStatus::Ok);
    assert_eq!(fast.mentions, 6);
    assert_eq!(fast.score, 100);

    let slow = &analysis.models[&ProviderKind::Gemini];
    assert_eq!(slow.status, ProbeStatus::Ok);
    assert_eq!(slow.score, 0);
}

#[tokio::test(start_paused = true)]
async fn test_slow_providers_run_concurrently() {
    let service = common::analysis_service(vec![
        Arc::new(SlowGenerator::new(
            ProviderKind::ChatGpt,
            Duration::from_secs(30),
            "stripe.com",
        )),
        Arc::new(SlowGenerator::new(
            ProviderKind::Gemini,
            Duration::from_secs(30),
            "stripe.com",
        )),
    ]);

    let started = tokio::time::Instant::now();
    let analysis = service.analyze(&domain("stripe.com")).await;
    let elapsed = started.elapsed();

    // sequential providers would take 180s
    assert!(elapsed < Duration::from_secs(91), "{elapsed:?}");
    assert!(analysis.models.values().all(|r| r.visible));
}

#[tokio::test]
async fn test_low_visibility_cards_follow_provider_order() {
    // registered Gemini first; cards still come out ChatGPT first
    let service = common::analysis_service(vec![
        Arc::new(ScriptedGenerator::new(ProviderKind::Gemini, &["nothing relevant"])),
        Arc::new(ScriptedGenerator::new(ProviderKind::ChatGpt, &["nothing relevant"])),
    ]);

    let analysis = service.analyze(&domain("stripe.com")).await;

    let low: Vec<&str> = analysis
        .highlights
        .iter()
        .filter(|h| h.title.starts_with("Low ") && h.title.ends_with(" Visibility"))
        .map(|h| h.title.as_str())
        .collect();
    assert_eq!(low, vec!["Low ChatGPT Visibility", "Low Gemini Visibility"]);
}

#[tokio::test]
async fn test_panicking_probe_yields_fallback() {
    let service = common::analysis_service(vec![
        Arc::new(ScriptedGenerator::new(ProviderKind::ChatGpt, &["stripe.com"])),
        Arc::new(PanickingGenerator(ProviderKind::Gemini)),
    ]);

    let analysis = service.analyze(&domain("stripe.com")).await;

    assert_eq!(analysis.overall_score, 0);
    assert_eq!(analysis.models.len(), 2);
    for result in analysis.results() {
        assert_eq!(result.score, 0);
        assert_eq!(result.status, ProbeStatus::Error);
        assert_eq!(result.status_note, "error");
    }
    assert_eq!(analysis.trends.len(), 3);
    assert_eq!(analysis.prompts.len(), 5);
    assert_eq!(analysis.competitors[0].score, 0);
}

#[tokio::test]
async fn test_zero_score_has_flat_trend() {
    let service = common::analysis_service(vec![
        Arc::new(UnconfiguredGenerator(ProviderKind::ChatGpt)),
        Arc::new(ScriptedGenerator::failing(ProviderKind::Gemini)),
    ]);

    let analysis = service.analyze(&domain("notion.so")).await;

    assert_eq!(analysis.overall_score, 0);
    assert!(analysis.trends.iter().all(|point| point.score == 0));
    assert_eq!(
        analysis.models[&ProviderKind::ChatGpt].status,
        ProbeStatus::NoCredential
    );
    assert_eq!(
        analysis.models[&ProviderKind::Gemini].status,
        ProbeStatus::CallError
    );
    assert!(analysis
        .highlights
        .iter()
        .any(|h| h.title == "Critical Visibility Issue" && h.kind == HighlightKind::VisibilityDrop));
}

#[tokio::test]
async fn test_prompt_generation_is_idempotent() {
    let service = common::analysis_service(common::stripe_generators());
    let domain = domain("notion.so");

    let first = service.prompts_for(&domain);
    let second = service.prompts_for(&domain);

    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[tokio::test]
async fn test_analyze_raw_rejects_before_network() {
    let chatgpt = Arc::new(ScriptedGenerator::new(ProviderKind::ChatGpt, &["stripe.com"]));
    let service = common::analysis_service(vec![chatgpt.clone() as Arc<dyn TextGenerator>]);

    assert!(service.analyze_raw("").await.is_err());
    assert!(service.analyze_raw("not a domain").await.is_err());
    assert_eq!(chatgpt.calls(), 0);
}
