//! Competitor comparison table.
//!
//! Peer scores, movement and per-provider flags are randomized around the
//! catalog baselines and are illustrative only. Ranks follow catalog order and
//! are not re-sorted by the randomized score, so a lower-ranked peer can show
//! a higher score than the entry above it.

use rand::Rng;
use std::collections::BTreeMap;

use crate::domain::catalog::PeerBrand;
use crate::domain::entities::{
    ChangeDirection, CompetitorEntry, DomainName, ProviderKind, ProviderPresence, VisibilityResult,
};

/// Maximum number of peers listed after the analyzed domain.
pub const MAX_PEERS: usize = 4;

/// Maximum absolute offset applied to a peer's baseline score.
const SCORE_JITTER: f64 = 10.0;

/// Builds the ranked table: the analyzed domain first, then up to
/// [`MAX_PEERS`] peers in catalog order.
pub fn competitor_table<'a, R: Rng + ?Sized>(
    domain: &DomainName,
    overall_score: u8,
    results: impl IntoIterator<Item = &'a VisibilityResult>,
    peers: &[PeerBrand],
    rng: &mut R,
) -> Vec<CompetitorEntry> {
    let own_models = results
        .into_iter()
        .map(|result| {
            (
                result.provider,
                ProviderPresence {
                    visible: result.visible,
                    frequency: result.mentions,
                },
            )
        })
        .collect();

    let mut table = Vec::with_capacity(1 + peers.len().min(MAX_PEERS));
    table.push(CompetitorEntry {
        rank: 1,
        brand: domain.to_string(),
        score: overall_score,
        change: ChangeDirection::Neutral,
        change_value: 0,
        models: own_models,
    });

    for (rank, peer) in (2u32..).zip(peers.iter().take(MAX_PEERS)) {
        table.push(peer_entry(rank, peer, rng));
    }

    table
}

fn peer_entry<R: Rng + ?Sized>(rank: u32, peer: &PeerBrand, rng: &mut R) -> CompetitorEntry {
    let jitter = rng.random_range(-SCORE_JITTER..=SCORE_JITTER);
    let score = (f64::from(peer.baseline) + jitter).clamp(0.0, 100.0).round() as u8;

    let change = if rng.random_bool(0.5) {
        ChangeDirection::Up
    } else {
        ChangeDirection::Down
    };
    let change_value = rng.random_range(1..=15u8);

    let models: BTreeMap<ProviderKind, ProviderPresence> = ProviderKind::ALL
        .iter()
        .map(|&provider| {
            let presence = ProviderPresence {
                visible: rng.random_bool(provider.peer_visibility_odds()),
                frequency: rng.random_range(0..=3u32),
            };
            (provider, presence)
        })
        .collect();

    CompetitorEntry {
        rank,
        brand: peer.name.clone(),
        score,
        change,
        change_value,
        models,
    }
}
