//! Ranking selector: picks the top players per position into a fixed
//! 1/2/3/1 roster.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::player::{PlayerRecord, PositionType};
use crate::domain::position::PositionTable;

/// How many players a position contributes to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionQuota {
    pub position_id: u32,
    pub count: usize,
}

/// Quotas in output order: goalkeeper, defenders, midfielders, forward.
pub const QUOTAS: [PositionQuota; 4] = [
    PositionQuota { position_id: 1, count: 1 },
    PositionQuota { position_id: 2, count: 2 },
    PositionQuota { position_id: 3, count: 3 },
    PositionQuota { position_id: 4, count: 1 },
];

pub const ROSTER_SIZE: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlayer {
    pub name: String,
    #[serde(rename = "total_goals_assists")]
    pub combined_score: u32,
    pub position: String,
}

/// Ordered selection output, grouped by position in [`QUOTAS`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<RankedPlayer>,
}

impl Roster {
    pub fn new(players: Vec<RankedPlayer>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[RankedPlayer] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedPlayer> {
        self.players.iter()
    }

    /// Entries carrying the given position code, in roster order.
    pub fn with_position<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a RankedPlayer> {
        self.players.iter().filter(move |p| p.position == code)
    }

    pub fn count_position(&self, code: &str) -> usize {
        self.with_position(code).count()
    }

    pub fn into_players(self) -> Vec<RankedPlayer> {
        self.players
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RankedPlayer;
    type IntoIter = std::slice::Iter<'a, RankedPlayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// Builds the roster from `players`, optionally restricted to `team_filter`.
///
/// Never fails. Positions with fewer candidates than their quota contribute
/// what they have, so the result may hold fewer than [`ROSTER_SIZE`] entries.
/// An id missing from `position_types` yields an empty position code.
pub fn select(
    players: &[PlayerRecord],
    position_types: &[PositionType],
    team_filter: Option<u32>,
) -> Roster {
    let table = PositionTable::new(position_types);
    let mut roster = Vec::with_capacity(ROSTER_SIZE);

    for quota in QUOTAS {
        let code = match table.code(quota.position_id) {
            Some(code) => code,
            None => {
                warn!(
                    position_id = quota.position_id,
                    "no position type for id, using empty code"
                );
                ""
            }
        };

        let candidates = eligible(players, quota.position_id, team_filter);
        let available = candidates.len();
        let top = top_by_score(candidates, quota.count);
        debug!(
            position = code,
            available,
            taken = top.len(),
            required = quota.count,
            "ranked position"
        );

        roster.extend(top.into_iter().map(|p| RankedPlayer {
            name: p.web_name.clone(),
            combined_score: p.combined_score(),
            position: code.to_string(),
        }));
    }

    Roster::new(roster)
}

fn eligible(
    players: &[PlayerRecord],
    position_id: u32,
    team_filter: Option<u32>,
) -> Vec<&PlayerRecord> {
    players
        .iter()
        .filter(|p| p.element_type == position_id)
        .filter(|p| team_filter.is_none_or(|team| p.plays_for(team)))
        .collect()
}

/// Highest scores first; equal scores keep their input order.
fn top_by_score(mut candidates: Vec<&PlayerRecord>, count: usize) -> Vec<&PlayerRecord> {
    candidates.sort_by_key(|p| Reverse(p.combined_score()));
    candidates.truncate(count);
    candidates
}
