//! Prompt-level visibility table.

use chrono::NaiveDate;

use crate::domain::entities::{
    DomainName, PromptRow, PromptStatus, ProviderKind, VisibilityResult,
};

/// Builds one row per prompt.
///
/// Visibility is decided from the collected excerpts: a provider qualifies
/// when it is visible and at least one of its excerpts contains the domain
/// string. The first qualifying provider in fixed order is reported for
/// every row, since excerpts are not attributed to individual prompts.
pub fn prompt_rows<'a>(
    prompts: &[String],
    domain: &DomainName,
    results: impl IntoIterator<Item = &'a VisibilityResult>,
    checked_on: NaiveDate,
) -> Vec<PromptRow> {
    let first_shown_in = first_provider_with_excerpt(results, domain);
    let status = if first_shown_in.is_some() {
        PromptStatus::Visible
    } else {
        PromptStatus::NotVisible
    };

    prompts
        .iter()
        .map(|title| PromptRow {
            title: title.clone(),
            status,
            first_shown_in,
            date_checked: checked_on,
        })
        .collect()
}

fn first_provider_with_excerpt<'a>(
    results: impl IntoIterator<Item = &'a VisibilityResult>,
    domain: &DomainName,
) -> Option<ProviderKind> {
    let needle = domain.as_str();
    let mut qualifying: Vec<ProviderKind> = results
        .into_iter()
        .filter(|result| {
            result.visible
                && result
                    .excerpts
                    .iter()
                    .any(|excerpt| excerpt.to_lowercase().contains(needle))
        })
        .map(|result| result.provider)
        .collect();
    qualifying.sort();
    qualifying.into_iter().next()
}
