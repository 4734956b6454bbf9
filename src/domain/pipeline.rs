//! End-to-end roster construction from a validated snapshot.

use tracing::{info, warn};

use crate::domain::error::Magnificent7Error;
use crate::domain::roster_validation::validate_roster;
use crate::domain::selection::{select, Roster};
use crate::domain::snapshot::LeagueSnapshot;
use crate::domain::team_filter::resolve_team_filter;

/// Resolves the team filter, selects the roster and checks it is fit for
/// delivery.
///
/// An unknown team name fails before selection runs. A roster that does not
/// satisfy the fixed composition fails with
/// [`Magnificent7Error::OutboundShape`].
pub fn build_roster(
    snapshot: &LeagueSnapshot,
    team_name: Option<&str>,
) -> Result<Roster, Magnificent7Error> {
    let team_filter = resolve_team_filter(team_name, &snapshot.teams)?;

    let roster = select(&snapshot.elements, &snapshot.element_types, team_filter);
    if let Err(violation) = validate_roster(&roster) {
        warn!(
            team = ?team_filter,
            entries = roster.len(),
            %violation,
            "selected roster failed delivery checks"
        );
        return Err(violation.into());
    }

    info!(team = ?team_filter, players = snapshot.elements.len(), "roster built");
    Ok(roster)
}
