//! Match records: the append-only history the engine reads.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Outcome of one match between two players. Immutable once recorded.
///
/// `winner` is `None` for a draw. A bye is recorded as a self-pairing:
/// `player1 == player2 == winner`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player1: PlayerId,
    pub player2: PlayerId,
    /// Winning player, or `None` for a draw.
    pub winner: Option<PlayerId>,
}

impl MatchRecord {
    pub fn new(player1: PlayerId, player2: PlayerId, winner: Option<PlayerId>) -> Self {
        Self {
            player1,
            player2,
            winner,
        }
    }

    /// A bye: the player was paired with themselves for the round.
    pub fn is_bye(&self) -> bool {
        self.player1 == self.player2
    }

    /// Neither player won.
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Whether the given player took part in this match.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == id
    }

    /// The other participant, if `id` played here and the match was not a bye.
    pub fn opponent_of(&self, id: PlayerId) -> Option<PlayerId> {
        if self.is_bye() {
            None
        } else if self.player1 == id {
            Some(self.player2)
        } else if self.player2 == id {
            Some(self.player1)
        } else {
            None
        }
    }
}
