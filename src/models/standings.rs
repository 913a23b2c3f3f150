//! Standings rows derived from match history.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One player's current standing, recomputed from the full match history at
/// the start of each round. Never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub matches_played: u32,
    pub byes_received: u32,
    /// Total wins across every opponent this player has faced (byes have no
    /// opponent and contribute nothing).
    pub opponent_wins: u32,
    /// `matches_played - wins - draws/2`. Lower is better.
    pub rank: f64,
}

impl StandingsRow {
    /// Standing order: rank ascending, then opponent wins descending.
    pub fn cmp_standing(&self, other: &Self) -> Ordering {
        self.rank
            .total_cmp(&other.rank)
            .then_with(|| other.opponent_wins.cmp(&self.opponent_wins))
    }
}
