//! Backtracking search for a complete set of disjoint pairings.

use crate::models::{CandidatePair, Pairing, PlayerId};
use std::collections::HashSet;

/// Assemble exactly `target` pairings with disjoint members, drawing from
/// `candidates` in the order given, optionally starting from a fixed `seed`
/// pairing (the bye). Returns `None` when no complete set exists.
///
/// Candidates sorted by standing proximity usually succeed on the first
/// depth-first path; backtracking only kicks in when an early pick strands
/// a later player with no remaining legal partner.
pub fn find_pairing_set(
    candidates: &[CandidatePair],
    target: usize,
    seed: Option<Pairing>,
) -> Option<Vec<Pairing>> {
    let mut pairs = Vec::with_capacity(target);
    let mut used = HashSet::new();
    if let Some(seed) = seed {
        used.insert(seed.id1);
        used.insert(seed.id2);
        pairs.push(seed);
    }
    if extend(candidates, 0, target, &mut pairs, &mut used) {
        Some(pairs)
    } else {
        None
    }
}

/// Depth-first extension of the partial set, considering candidates from
/// position `from` onward. A tentatively accepted pair is rolled back
/// before the next candidate at this depth is tried.
fn extend(
    candidates: &[CandidatePair],
    from: usize,
    target: usize,
    pairs: &mut Vec<Pairing>,
    used: &mut HashSet<PlayerId>,
) -> bool {
    if pairs.len() == target {
        return true;
    }
    for (offset, candidate) in candidates[from..].iter().enumerate() {
        if used.contains(&candidate.id1) || used.contains(&candidate.id2) {
            continue;
        }
        used.insert(candidate.id1);
        used.insert(candidate.id2);
        pairs.push(Pairing::from(candidate));
        if extend(candidates, from + offset + 1, target, pairs, used) {
            return true;
        }
        pairs.pop();
        used.remove(&candidate.id1);
        used.remove(&candidate.id2);
        log::trace!(
            "backtracking over pair ({}, {})",
            candidate.name1,
            candidate.name2
        );
    }
    false
}
