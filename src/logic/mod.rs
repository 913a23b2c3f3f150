//! Pairing engine: pure functions from roster + match history to rounds.

mod bye;
mod candidates;
mod round;
mod solver;
mod standings;

pub use bye::bye_candidates;
pub use candidates::candidate_pairs;
pub use round::compute_pairings;
pub use solver::find_pairing_set;
pub use standings::compute_standings;
