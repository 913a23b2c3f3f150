//! Enumeration of legal pairing candidates in search order.

use crate::models::{CandidatePair, MatchRecord, PlayerId, StandingsRow};
use std::collections::HashSet;

/// List every pair of roster players who have not yet faced each other.
///
/// `standings` must already be in standing order (as `compute_standings`
/// returns it). Scanning it pairwise then yields the order the solver
/// wants: pairs of well-ranked, closely-matched players first, each pair
/// led by its better-standing member. Byes are self-pairings and never
/// count as having faced anyone.
pub fn candidate_pairs(standings: &[StandingsRow], matches: &[MatchRecord]) -> Vec<CandidatePair> {
    let played: HashSet<(PlayerId, PlayerId)> = matches
        .iter()
        .filter(|m| !m.is_bye())
        .map(|m| ordered_ids(m.player1, m.player2))
        .collect();

    let mut pairs = Vec::new();
    for (i, first) in standings.iter().enumerate() {
        for second in &standings[i + 1..] {
            if played.contains(&ordered_ids(first.player_id, second.player_id)) {
                continue;
            }
            pairs.push(CandidatePair {
                id1: first.player_id,
                name1: first.name.clone(),
                id2: second.player_id,
                name2: second.name.clone(),
            });
        }
    }
    pairs
}

/// Canonical key for an unordered pair, so (a, b) and (b, a) collide.
fn ordered_ids(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
