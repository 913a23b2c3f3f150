//! Whole-tournament simulation: random results over ceil(log2 n) rounds,
//! checking the engine's invariants after every round.

use std::collections::HashSet;

use rand::Rng;
use swiss_tournament::{PlayerId, TournamentStore};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Play one round with random results. Each non-bye match is a win for
/// either side or a draw, roughly 40/40/20.
fn play_round(store: &mut TournamentStore, rng: &mut impl Rng) {
    let pairings = store.pairings().unwrap();
    assert_eq!(pairings.len(), (store.count_players() + 1) / 2);

    let mut seen = HashSet::new();
    for p in &pairings {
        assert!(seen.insert(p.id1));
        if p.is_bye() {
            store.record_match(p.id1, p.id1, Some(p.id1));
            log::debug!("{} got a bye", p.name1);
            continue;
        }
        assert!(seen.insert(p.id2));
        match rng.gen_range(0..10) {
            0..=3 => store.record_match(p.id1, p.id2, Some(p.id1)),
            4..=7 => store.record_match(p.id1, p.id2, Some(p.id2)),
            _ => store.record_match(p.id1, p.id2, None),
        }
    }
    let roster: HashSet<PlayerId> = store.players().iter().map(|p| p.id).collect();
    assert_eq!(seen, roster);
}

/// Run a full tournament of ceil(log2(player_count)) rounds and check the
/// accumulated history afterwards.
fn sim_tournament(player_count: usize, rng: &mut impl Rng) {
    log::info!("simulating a tournament with {player_count} players");
    let mut store = TournamentStore::new();
    for i in 1..=player_count {
        store.register_player(format!("Player{i:03}"));
    }

    let rounds = (player_count as f64).log2().ceil() as u32;
    for round in 1..=rounds {
        log::info!("playing round {round}");
        play_round(&mut store, rng);
    }

    // Nobody ever meets the same opponent twice.
    let mut met = HashSet::new();
    for m in store.matches().iter().filter(|m| !m.is_bye()) {
        let key = (m.player1.min(m.player2), m.player1.max(m.player2));
        assert!(met.insert(key), "rematch recorded during simulation");
    }

    let mut total_byes = 0;
    for (i, row) in store.standings().iter().enumerate() {
        total_byes += row.byes_received;
        assert_eq!(row.matches_played, rounds, "{} missed a round", row.name);
        assert!(row.byes_received <= 1, "{} got more than one bye", row.name);
        assert!(row.wins + row.draws <= rounds);
        if i == 0 && rounds > 0 {
            assert!(row.wins + row.draws > 0, "leader never scored");
        }
    }
    if player_count % 2 != 0 {
        assert_eq!(total_byes, rounds, "odd roster should bye once per round");
    }
}

#[test]
fn small_rosters_survive_full_tournaments() {
    init_logging();
    let mut rng = rand::thread_rng();
    for n in [2, 3, 4, 5, 7, 8, 9, 16] {
        sim_tournament(n, &mut rng);
    }
}

#[test]
fn random_roster_survives_a_full_tournament() {
    init_logging();
    let mut rng = rand::thread_rng();
    let n = rng.gen_range(2..=99);
    sim_tournament(n, &mut rng);
}
