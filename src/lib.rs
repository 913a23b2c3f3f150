//! Swiss-system tournament pairing engine: standings, legal-pair
//! enumeration, bye selection, and the backtracking round builder.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    bye_candidates, candidate_pairs, compute_pairings, compute_standings, find_pairing_set,
};
pub use models::{
    CandidatePair, MatchRecord, Pairing, PairingError, Player, PlayerId, StandingsRow,
};
pub use store::TournamentStore;
