//! Candidate pairs, round pairings, and pairing failures.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Two players eligible to meet: they have never faced each other. Oriented
/// with the better-standing player first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

/// One entry in a round's pairing list. `id1 == id2` denotes a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    /// Pairing of a player with themselves: a bye.
    pub fn bye(id: PlayerId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id1: id,
            name1: name.clone(),
            id2: id,
            name2: name,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.id1 == self.id2
    }
}

impl From<&CandidatePair> for Pairing {
    fn from(c: &CandidatePair) -> Self {
        Self {
            id1: c.id1,
            name1: c.name1.clone(),
            id2: c.id2,
            name2: c.name2.clone(),
        }
    }
}

/// Terminal failures when building a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PairingError {
    /// Odd player count and every player has already received a bye.
    NoEligibleBye,
    /// No complete set of pairings exists without repeating a match, under
    /// any permitted bye assignment.
    Impossible,
}

impl std::fmt::Display for PairingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingError::NoEligibleBye => write!(f, "no player is eligible for a bye"),
            PairingError::Impossible => {
                write!(f, "cannot construct a complete round without a rematch")
            }
        }
    }
}

impl std::error::Error for PairingError {}
