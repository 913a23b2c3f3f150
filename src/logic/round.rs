//! Round orchestration: standings, candidates, bye retry, search.

use crate::logic::{bye_candidates, candidate_pairs, compute_standings, find_pairing_set};
use crate::models::{MatchRecord, Pairing, PairingError, Player};

/// Produce the complete pairing list for the next round.
///
/// Every player appears exactly once and nobody meets an opponent they have
/// already played. With an odd roster, exactly one pairing is a bye (a
/// player paired with themselves), given to the worst-standing player who
/// has not yet had one; when that bye leaves the rest unpairable, the
/// next-worst eligible player is tried instead, until the search succeeds
/// or every eligible bye has been ruled out.
pub fn compute_pairings(
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<Pairing>, PairingError> {
    let standings = compute_standings(players, matches);
    let candidates = candidate_pairs(&standings, matches);
    let target = (standings.len() + 1) / 2;

    log::debug!(
        "pairing {} players using {} possible pairings",
        standings.len(),
        candidates.len()
    );

    if standings.len() % 2 == 0 {
        // No bye to vary, so a single failed search is terminal.
        return find_pairing_set(&candidates, target, None).ok_or(PairingError::Impossible);
    }

    let eligible = bye_candidates(&standings);
    if eligible.is_empty() {
        return Err(PairingError::NoEligibleBye);
    }
    for row in eligible.iter().rev() {
        log::debug!("trying {} as the bye player", row.name);
        let bye = Pairing::bye(row.player_id, row.name.clone());
        if let Some(pairs) = find_pairing_set(&candidates, target, Some(bye)) {
            return Ok(pairs);
        }
    }
    log::debug!("pairing impossible under any bye assignment");
    Err(PairingError::Impossible)
}
