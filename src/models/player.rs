//! Player identity: the roster entries the engine pairs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in match records and pairings).
pub type PlayerId = Uuid;

/// A registered player. Wins, byes, and rank are not stored here; they are
/// derived from the match history each round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
