//! Aggregate analysis returned for one domain search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::domain_name::DomainName;
use super::visibility::{ProviderKind, VisibilityResult};

/// Complete result of one user-initiated search.
///
/// `prompts` and `highlights` are derived from `models` when the analysis is
/// assembled and are never mutated independently afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAnalysis {
    pub domain: DomainName,
    pub overall_score: u8,
    /// One result per configured provider, keyed in fixed provider order.
    pub models: BTreeMap<ProviderKind, VisibilityResult>,
    pub trends: Vec<TrendPoint>,
    pub prompts: Vec<PromptRow>,
    pub competitors: Vec<CompetitorEntry>,
    pub highlights: Vec<Highlight>,
}

impl DomainAnalysis {
    /// Per-provider results in fixed provider order.
    pub fn results(&self) -> impl Iterator<Item = &VisibilityResult> {
        self.models.values()
    }

    pub fn total_mentions(&self) -> u32 {
        self.results().map(|r| r.mentions).sum()
    }
}

/// One point of the synthetic trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Abbreviated month name, e.g. `"Oct"`.
    pub period: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptStatus {
    Visible,
    NotVisible,
}

/// Prompt-level visibility row shown on the prompts page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRow {
    pub title: String,
    pub status: PromptStatus,
    /// First provider (in fixed order) whose excerpts mention the domain.
    pub first_shown_in: Option<ProviderKind>,
    pub date_checked: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Neutral,
}

/// Display flags for one brand on one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPresence {
    pub visible: bool,
    pub frequency: u32,
}

/// One row of the competitor comparison.
///
/// Ranks follow catalog order, not score: a lower-ranked peer may show a
/// higher (randomized) score than a higher-ranked one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorEntry {
    pub rank: u32,
    pub brand: String,
    pub score: u8,
    pub change: ChangeDirection,
    /// Magnitude of the change in percent.
    pub change_value: u8,
    pub models: BTreeMap<ProviderKind, ProviderPresence>,
}

/// Styling tag for a highlight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightKind {
    VisibilityDrop,
    NewCompetitor,
    MissedPrompt,
}

/// Qualitative, rule-derived observation about an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    pub title: String,
    pub description: String,
    /// Short display value, e.g. `"12%"` or `"1/2 models"`.
    pub value: String,
}

impl Highlight {
    pub fn new(
        kind: HighlightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            value: value.into(),
        }
    }
}
