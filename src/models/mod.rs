//! Data structures for Swiss pairing: players, match history, derived rounds.

mod match_record;
mod pairing;
mod player;
mod standings;

pub use match_record::MatchRecord;
pub use pairing::{CandidatePair, Pairing, PairingError};
pub use player::{Player, PlayerId};
pub use standings::StandingsRow;
