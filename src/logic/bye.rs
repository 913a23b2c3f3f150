//! Bye eligibility: who can still sit out a round.

use crate::models::StandingsRow;

/// Players who have never received a bye, best standing first.
///
/// The round orchestrator consumes this list from the worst end: the
/// lowest-standing eligible player is the preferred bye recipient. Empty
/// when every player has already had one, which makes an odd-count round
/// impossible to schedule.
pub fn bye_candidates(standings: &[StandingsRow]) -> Vec<&StandingsRow> {
    standings
        .iter()
        .filter(|row| row.byes_received == 0)
        .collect()
}
