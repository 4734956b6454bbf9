//! League reference records: players, position types and teams.

use serde::Deserialize;

/// One player entry from the snapshot's `elements` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub id: Option<u32>,
    pub web_name: String,
    pub element_type: u32,
    #[serde(default)]
    pub team: Option<u32>,
    pub goals_scored: u32,
    pub assists: u32,
}

impl PlayerRecord {
    /// Goals scored plus assists, the sole ranking key.
    pub fn combined_score(&self) -> u32 {
        self.goals_scored.saturating_add(self.assists)
    }

    pub fn plays_for(&self, team_id: u32) -> bool {
        self.team == Some(team_id)
    }
}

/// Position reference data from `element_types`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionType {
    pub id: u32,
    pub singular_name_short: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
}
