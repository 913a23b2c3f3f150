//! Standings computation from raw match history.

use crate::models::{MatchRecord, Player, PlayerId, StandingsRow};
use std::collections::HashMap;

/// Counts accumulated for one player while scanning the history.
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    wins: u32,
    draws: u32,
    played: u32,
    byes: u32,
}

/// Derive one `StandingsRow` per roster player from the full match history.
///
/// Rows come back in standing order: rank ascending, then opponent wins
/// descending, ties left in roster order. A bye (self-pairing) counts once
/// toward the player's matches, wins, and byes; it has no opponent, so it
/// never enters anyone's opponent-win aggregate.
///
/// Tallies cover every id appearing in the history, so a player removed
/// from the roster still contributes wins to the opponents they faced, even
/// though no row is emitted for them.
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingsRow> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();

    for m in matches {
        {
            let t = tallies.entry(m.player1).or_default();
            t.played += 1;
            if m.is_draw() {
                t.draws += 1;
            }
            if m.is_bye() {
                t.byes += 1;
            }
        }
        if !m.is_bye() {
            let t = tallies.entry(m.player2).or_default();
            t.played += 1;
            if m.is_draw() {
                t.draws += 1;
            }
        }
        if let Some(winner) = m.winner {
            tallies.entry(winner).or_default().wins += 1;
        }
    }

    // Second pass: each non-bye record credits both sides with the other
    // side's total wins.
    let mut opponent_wins: HashMap<PlayerId, u32> = HashMap::new();
    for m in matches.iter().filter(|m| !m.is_bye()) {
        let wins1 = tallies.get(&m.player1).map_or(0, |t| t.wins);
        let wins2 = tallies.get(&m.player2).map_or(0, |t| t.wins);
        *opponent_wins.entry(m.player1).or_default() += wins2;
        *opponent_wins.entry(m.player2).or_default() += wins1;
    }

    let mut rows: Vec<StandingsRow> = players
        .iter()
        .map(|p| {
            let t = tallies.get(&p.id).copied().unwrap_or_default();
            StandingsRow {
                player_id: p.id,
                name: p.name.clone(),
                wins: t.wins,
                draws: t.draws,
                matches_played: t.played,
                byes_received: t.byes,
                opponent_wins: opponent_wins.get(&p.id).copied().unwrap_or(0),
                rank: f64::from(t.played) - f64::from(t.wins) - f64::from(t.draws) / 2.0,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.cmp_standing(b));
    rows
}
