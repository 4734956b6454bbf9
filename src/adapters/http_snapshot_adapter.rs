//! HTTP snapshot adapter backed by a blocking `reqwest` client.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::domain::config_validation::SourceConfig;
use crate::domain::error::Magnificent7Error;
use crate::domain::snapshot::LeagueSnapshot;
use crate::ports::snapshot_port::SnapshotPort;

/// Fetches the league snapshot from the configured upstream URL.
///
/// The client is blocking. Inside an async runtime, construct it before the
/// runtime starts and call it from a blocking task.
pub struct HttpSnapshotAdapter {
    client: Client,
    url: String,
}

impl HttpSnapshotAdapter {
    pub fn new(source: &SourceConfig) -> Result<Self, Magnificent7Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .user_agent(source.user_agent.clone())
            .build()
            .map_err(|e| Magnificent7Error::UpstreamFetch {
                url: source.url.clone(),
                reason: format!("failed to build http client: {e}"),
            })?;
        Ok(Self {
            client,
            url: source.url.clone(),
        })
    }

    fn fetch_error(&self, reason: impl Into<String>) -> Magnificent7Error {
        Magnificent7Error::UpstreamFetch {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }
}

impl SnapshotPort for HttpSnapshotAdapter {
    fn fetch_snapshot(&self) -> Result<LeagueSnapshot, Magnificent7Error> {
        debug!(url = %self.url, "fetching league snapshot");
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.fetch_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "upstream returned non-success status");
            return Err(self.fetch_error(format!("upstream returned {status}")));
        }

        let body = response
            .bytes()
            .map_err(|e| self.fetch_error(format!("failed to read body: {e}")))?;
        info!(url = %self.url, bytes = body.len(), "fetched league snapshot");

        LeagueSnapshot::from_slice(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
