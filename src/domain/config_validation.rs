//! Configuration validation.
//!
//! Validates the `[source]` and `[web]` sections before anything is fetched
//! or bound.

use std::net::SocketAddr;

use crate::domain::error::Magnificent7Error;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";
pub const DEFAULT_USER_AGENT: &str = concat!("magnificent7/", env!("CARGO_PKG_VERSION"));

/// Settings for the upstream snapshot fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

pub fn validate_source_config(config: &dyn ConfigPort) -> Result<SourceConfig, Magnificent7Error> {
    let url = validate_url(config)?;
    let timeout_secs = validate_timeout(config)?;
    let user_agent = config.get_string_or("source", "user_agent", DEFAULT_USER_AGENT);
    Ok(SourceConfig {
        url,
        timeout_secs,
        user_agent,
    })
}

pub fn validate_listen_addr(config: &dyn ConfigPort) -> Result<SocketAddr, Magnificent7Error> {
    let raw = config.get_string_or("web", "listen", DEFAULT_LISTEN);
    raw.parse().map_err(|_| Magnificent7Error::ConfigInvalid {
        section: "web".to_string(),
        key: "listen".to_string(),
        reason: format!("'{raw}' is not a socket address"),
    })
}

fn validate_url(config: &dyn ConfigPort) -> Result<String, Magnificent7Error> {
    let url = config
        .get_string("source", "url")
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Magnificent7Error::ConfigMissing {
            section: "source".to_string(),
            key: "url".to_string(),
        })?;

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Magnificent7Error::ConfigInvalid {
            section: "source".to_string(),
            key: "url".to_string(),
            reason: "url must start with http:// or https://".to_string(),
        });
    }
    Ok(url)
}

fn validate_timeout(config: &dyn ConfigPort) -> Result<u64, Magnificent7Error> {
    let value = config
        .get_int("source", "timeout_secs")?
        .unwrap_or(DEFAULT_TIMEOUT_SECS as i64);
    if !(1..=MAX_TIMEOUT_SECS as i64).contains(&value) {
        return Err(Magnificent7Error::ConfigInvalid {
            section: "source".to_string(),
            key: "timeout_secs".to_string(),
            reason: format!("timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}"),
        });
    }
    Ok(value as u64)
}
