//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_snapshot_adapter::FileSnapshotAdapter;
use crate::adapters::http_snapshot_adapter::HttpSnapshotAdapter;
use crate::domain::config_validation::validate_source_config;
use crate::domain::error::Magnificent7Error;
use crate::domain::pipeline::build_roster;
use crate::domain::selection::Roster;
use crate::logging::LoggingConfig;
use crate::ports::config_port::ConfigPort;
use crate::ports::snapshot_port::SnapshotPort;

#[derive(Parser, Debug)]
#[command(
    name = "magnificent7",
    about = "Top seven fantasy-football players by goals plus assists"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a snapshot and print the selected roster
    Select {
        #[arg(short, long, required_unless_present = "snapshot")]
        config: Option<PathBuf>,
        /// Read the snapshot from a JSON file instead of the configured URL
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
        /// Restrict selection to one team (case-insensitive name)
        #[arg(short, long)]
        team: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Check that a snapshot file has the expected shape
    Check {
        #[arg(short, long)]
        snapshot: PathBuf,
    },
    /// Start the web server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Select {
            config,
            snapshot,
            team,
            json,
        } => run_select(config.as_ref(), snapshot.as_ref(), team.as_deref(), json),
        Command::Check { snapshot } => run_check(&snapshot),
        Command::Serve { config } => run_serve(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|err| {
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Installs logging from `[logging]`, or the defaults without a config file.
fn init_logging(config: Option<&dyn ConfigPort>) -> Result<(), ExitCode> {
    let logging = match config {
        Some(c) => LoggingConfig::from_config(c).map_err(|err| {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        })?,
        None => LoggingConfig::default(),
    };
    logging.init();
    Ok(())
}

/// Picks the snapshot source: an explicit file wins over the configured URL.
pub fn build_snapshot_port(
    config: Option<&dyn ConfigPort>,
    snapshot: Option<&PathBuf>,
) -> Result<Box<dyn SnapshotPort>, Magnificent7Error> {
    if let Some(path) = snapshot {
        return Ok(Box::new(FileSnapshotAdapter::new(path.clone())));
    }
    let config = config.ok_or_else(|| Magnificent7Error::ConfigMissing {
        section: "source".to_string(),
        key: "url".to_string(),
    })?;
    let source = validate_source_config(config)?;
    Ok(Box::new(HttpSnapshotAdapter::new(&source)?))
}

/// Fetches a snapshot from `port` and builds a delivery-ready roster.
pub fn run_select_pipeline(
    port: &dyn SnapshotPort,
    team: Option<&str>,
) -> Result<Roster, Magnificent7Error> {
    info!(source = %port.describe(), team = team.unwrap_or("-"), "selecting roster");
    let snapshot = port.fetch_snapshot()?;
    build_roster(&snapshot, team)
}

pub fn format_roster_table(roster: &Roster) -> String {
    let mut out = format!("{:<4} {:<24} {:>4}\n", "POS", "NAME", "G+A");
    for player in roster {
        out.push_str(&format!(
            "{:<4} {:<24} {:>4}\n",
            player.position, player.name, player.combined_score
        ));
    }
    out
}

/// Renders an error for the terminal, one line per inbound field problem.
pub fn format_error(err: &Magnificent7Error) -> String {
    match err {
        Magnificent7Error::InboundShape(errors) => {
            let mut out = String::from("error: invalid snapshot");
            for (field, messages) in errors.iter() {
                for message in messages {
                    out.push_str(&format!("\n  {field}: {message}"));
                }
            }
            out
        }
        other => format!("error: {other}"),
    }
}

fn run_select(
    config_path: Option<&PathBuf>,
    snapshot_path: Option<&PathBuf>,
    team: Option<&str>,
    json: bool,
) -> ExitCode {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };
    if let Err(code) = init_logging(config.as_ref().map(|c| c as &dyn ConfigPort)) {
        return code;
    }

    let port = match build_snapshot_port(
        config.as_ref().map(|c| c as &dyn ConfigPort),
        snapshot_path,
    ) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            return (&e).into();
        }
    };

    let roster = match run_select_pipeline(port.as_ref(), team) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            return (&e).into();
        }
    };

    if json {
        match serde_json::to_string_pretty(&roster) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                let err = Magnificent7Error::Io(std::io::Error::other(e));
                eprintln!("error: {err}");
                return (&err).into();
            }
        }
    } else {
        print!("{}", format_roster_table(&roster));
    }
    ExitCode::SUCCESS
}

fn run_check(snapshot_path: &PathBuf) -> ExitCode {
    let port = FileSnapshotAdapter::new(snapshot_path.clone());
    match port.fetch_snapshot() {
        Ok(snapshot) => {
            println!(
                "ok: {} players, {} teams, {} position types, total_players = {}",
                snapshot.elements.len(),
                snapshot.teams.len(),
                snapshot.element_types.len(),
                snapshot.total_players
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format_error(&e));
            (&e).into()
        }
    }
}

fn run_serve(config_path: &PathBuf) -> ExitCode {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{build_router, AppState};
        use crate::domain::config_validation::validate_listen_addr;
        use std::sync::Arc;

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(code) => return code,
        };
        if let Err(code) = init_logging(Some(&config)) {
            return code;
        }

        let source = match validate_source_config(&config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };
        let addr = match validate_listen_addr(&config) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        // The blocking client must be created and dropped outside the runtime.
        let snapshot_port: Arc<dyn SnapshotPort + Send + Sync> =
            match HttpSnapshotAdapter::new(&source) {
                Ok(a) => Arc::new(a),
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            };

        let router = build_router(AppState {
            snapshot_port: Arc::clone(&snapshot_port),
        });

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(r) => r,
            Err(e) => {
                let err = Magnificent7Error::Io(e);
                eprintln!("error: {err}");
                return (&err).into();
            }
        };

        let result = runtime.block_on(async {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(%addr, source = %source.url, "web server listening");
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await
        });
        drop(runtime);
        drop(snapshot_port);

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                let err = Magnificent7Error::Io(e);
                eprintln!("error: {err}");
                (&err).into()
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        eprintln!("error: web feature is required for serve");
        ExitCode::from(1)
    }
}

#[cfg(feature = "web")]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
