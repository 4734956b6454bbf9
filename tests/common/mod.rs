#![allow(dead_code)]

use magnificent7::domain::error::Magnificent7Error;
use magnificent7::domain::snapshot::LeagueSnapshot;
use magnificent7::ports::snapshot_port::SnapshotPort;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves a canned payload through the real shape validation, or fails
/// like an unreachable upstream.
pub struct MockSnapshotPort {
    pub payload: Result<Value, String>,
    pub calls: AtomicUsize,
}

impl MockSnapshotPort {
    pub fn new(payload: Value) -> Self {
        Self {
            payload: Ok(payload),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            payload: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SnapshotPort for MockSnapshotPort {
    fn fetch_snapshot(&self) -> Result<LeagueSnapshot, Magnificent7Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Ok(value) => LeagueSnapshot::from_json(value.clone()),
            Err(reason) => Err(Magnificent7Error::UpstreamFetch {
                url: self.describe(),
                reason: reason.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        "mock://snapshot".to_string()
    }
}

pub fn player_json(name: &str, position: u32, team: u32, goals: u32, assists: u32) -> Value {
    json!({
        "web_name": name,
        "element_type": position,
        "team": team,
        "goals_scored": goals,
        "assists": assists,
    })
}

pub fn element_types_json() -> Value {
    json!([
        {"id": 1, "singular_name": "Goalkeeper", "singular_name_short": "GKP"},
        {"id": 2, "singular_name": "Defender", "singular_name_short": "DEF"},
        {"id": 3, "singular_name": "Midfielder", "singular_name_short": "MID"},
        {"id": 4, "singular_name": "Forward", "singular_name_short": "FWD"},
    ])
}

pub fn teams_json() -> Value {
    json!([
        {"id": 1, "name": "Arsenal", "short_name": "ARS"},
        {"id": 12, "name": "Liverpool", "short_name": "LIV"},
    ])
}

pub fn snapshot_json(elements: Vec<Value>) -> Value {
    json!({
        "events": [],
        "game_settings": {},
        "phases": [],
        "teams": teams_json(),
        "total_players": 11_000_000,
        "elements": elements,
        "element_stats": [],
        "element_types": element_types_json(),
    })
}

/// Enough players for a full roster from each of the two teams.
pub fn league_elements() -> Vec<Value> {
    vec![
        player_json("Raya", 1, 1, 0, 0),
        player_json("Alisson", 1, 12, 0, 1),
        player_json("Saliba", 2, 1, 2, 1),
        player_json("Gabriel", 2, 1, 4, 0),
        player_json("White", 2, 1, 1, 3),
        player_json("Van Dijk", 2, 12, 3, 1),
        player_json("Alexander-Arnold", 2, 12, 2, 9),
        player_json("Saka", 3, 1, 9, 11),
        player_json("Odegaard", 3, 1, 6, 8),
        player_json("Rice", 3, 1, 4, 4),
        player_json("Salah", 3, 12, 18, 13),
        player_json("Szoboszlai", 3, 12, 6, 4),
        player_json("Mac Allister", 3, 12, 5, 5),
        player_json("Havertz", 4, 1, 9, 4),
        player_json("Nunez", 4, 12, 8, 4),
    ]
}

pub fn league_snapshot_json() -> Value {
    snapshot_json(league_elements())
}
