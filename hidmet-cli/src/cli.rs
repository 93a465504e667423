//! Command-line interface.
//!
//! Fetches the bulletin once per invocation, then answers either the
//! "list all stations" or the "show one station" question. Sorting for
//! display happens here; the index returns feed order.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::extract::ExtractError;
use crate::feed::{FeedClient, FeedConfig, FeedError};
use crate::index::StationIndex;
use crate::render;

/// Current weather conditions for all major cities in Serbia, from the
/// RHMZ observed-conditions bulletin.
#[derive(Debug, Parser)]
#[command(name = "hidmet-cli", version)]
pub struct Cli {
    /// Bulletin URL (defaults to the RHMZ observed-conditions feed)
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available weather stations
    List,
    /// Show observed conditions for one station
    Show {
        /// Station name, exactly as printed by `list`
        station: String,

        /// Emit the observation as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute a parsed command, reporting failures on stderr.
pub async fn run(cli: Cli) -> ExitCode {
    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("hidmet-cli: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = FeedConfig::default().with_timeout(cli.timeout);
    if let Some(url) = cli.url {
        config = config.with_url(url);
    }

    let client = FeedClient::new(config)?;
    let index = StationIndex::new(client.fetch().await?);

    match cli.command {
        Command::List => {
            for name in sorted_names(&index)? {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { station, json } => match index.lookup(&station)? {
            Some(obs) => {
                if json {
                    println!("{}", render::render_json(&obs)?);
                } else {
                    print!("{}", render::render_observation(&obs));
                }
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("station {station:?} is not available");
                eprintln!("weather stations available:");
                for name in sorted_names(&index)? {
                    eprintln!("  {name}");
                }
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn sorted_names(index: &StationIndex) -> Result<Vec<String>, ExtractError> {
    let mut names = index.station_names()?;
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list() {
        let cli = Cli::try_parse_from(["hidmet-cli", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.timeout, 30);
        assert!(cli.url.is_none());
    }

    #[test]
    fn parses_show_with_json() {
        let cli = Cli::try_parse_from(["hidmet-cli", "show", "Novi Sad", "--json"]).unwrap();
        match cli.command {
            Command::Show { station, json } => {
                assert_eq!(station, "Novi Sad");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_url_and_timeout_overrides() {
        let cli = Cli::try_parse_from([
            "hidmet-cli",
            "--url",
            "http://localhost:8080/index.rss",
            "--timeout",
            "5",
            "list",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://localhost:8080/index.rss"));
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn show_requires_a_station() {
        assert!(Cli::try_parse_from(["hidmet-cli", "show"]).is_err());
    }
}
