//! JSON file snapshot adapter.

use crate::domain::error::Magnificent7Error;
use crate::domain::snapshot::LeagueSnapshot;
use crate::ports::snapshot_port::SnapshotPort;
use std::fs;
use std::path::PathBuf;

/// Reads a league snapshot saved to disk, e.g. a captured upstream response.
pub struct FileSnapshotAdapter {
    path: PathBuf,
}

impl FileSnapshotAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotPort for FileSnapshotAdapter {
    fn fetch_snapshot(&self) -> Result<LeagueSnapshot, Magnificent7Error> {
        let bytes = fs::read(&self.path).map_err(|e| Magnificent7Error::UpstreamFetch {
            url: self.describe(),
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "read snapshot file");
        LeagueSnapshot::from_slice(&bytes)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
