//! League snapshot source port trait.

use crate::domain::error::Magnificent7Error;
use crate::domain::snapshot::LeagueSnapshot;

/// A source of structurally validated league snapshots.
///
/// Implementations report transport problems as
/// [`Magnificent7Error::UpstreamFetch`] and malformed payloads as
/// [`Magnificent7Error::InboundShape`].
pub trait SnapshotPort {
    fn fetch_snapshot(&self) -> Result<LeagueSnapshot, Magnificent7Error>;

    /// Where snapshots come from, for log and error messages.
    fn describe(&self) -> String;
}
