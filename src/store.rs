//! In-memory storage collaborator: owns the roster and match history.

use crate::logic::{compute_pairings, compute_standings};
use crate::models::{MatchRecord, Pairing, PairingError, Player, PlayerId, StandingsRow};
use serde::{Deserialize, Serialize};

/// Roster and append-only match history for one tournament.
///
/// The pairing engine itself is stateless; this struct owns what it reads.
/// Callers append each round's results through `record_match` once the
/// pairings have been played. Not synchronized: hosts that handle
/// concurrent pairing requests must serialize access around it, or two
/// rounds computed over an evolving history could pair a rematch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TournamentStore {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player; returns the id assigned to them.
    pub fn register_player(&mut self, name: impl Into<String>) -> PlayerId {
        let player = Player::new(name);
        let id = player.id;
        self.players.push(player);
        id
    }

    /// Remove a player from the roster. Their match records stay, since
    /// history is append-only. Returns whether the player was present.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Record a finished match. `winner` is `None` for a draw; a bye is
    /// reported as `record_match(id, id, Some(id))`.
    pub fn record_match(&mut self, player1: PlayerId, player2: PlayerId, winner: Option<PlayerId>) {
        self.matches.push(MatchRecord::new(player1, player2, winner));
    }

    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Current standings, best player first.
    pub fn standings(&self) -> Vec<StandingsRow> {
        compute_standings(&self.players, &self.matches)
    }

    /// Pairings for the next round.
    pub fn pairings(&self) -> Result<Vec<Pairing>, PairingError> {
        compute_pairings(&self.players, &self.matches)
    }
}
