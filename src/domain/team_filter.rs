//! Team-name filter resolution.

use crate::domain::error::Magnificent7Error;
use crate::domain::player::Team;

/// Resolves an optional human-readable team name to a team id.
///
/// Matching is a case-insensitive exact comparison; the first matching team
/// wins. A missing or empty name means no filter. An unknown name is an
/// [`Magnificent7Error::InvalidTeamFilter`].
pub fn resolve_team_filter(
    team_name: Option<&str>,
    teams: &[Team],
) -> Result<Option<u32>, Magnificent7Error> {
    let Some(name) = team_name.filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    let wanted = name.to_lowercase();
    teams
        .iter()
        .find(|t| t.name.to_lowercase() == wanted)
        .map(|t| Some(t.id))
        .ok_or_else(|| Magnificent7Error::InvalidTeamFilter {
            team_name: name.to_string(),
        })
}
