//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::error::Magnificent7Error;
use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Settings from the `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

impl LoggingConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, Magnificent7Error> {
        let format = match config
            .get_string_or("logging", "format", "pretty")
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Ok(Self {
            level: config.get_string_or("logging", "level", "info"),
            format,
            ansi: config.get_bool("logging", "ansi")?.unwrap_or(true),
        })
    }

    /// Installs the global subscriber. `RUST_LOG` takes precedence over the
    /// configured level. Later calls are no-ops.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format {
            LogFormat::Json => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            LogFormat::Pretty => fmt()
                .with_env_filter(filter)
                .with_ansi(self.ansi)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if result.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}
