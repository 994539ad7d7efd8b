//! Command line client for the statistics backend.
//!
//! Drives the same endpoints as the dashboard through the shared `stats`
//! planning and shaping code, and prints text renderings of the results.

mod backend;
mod print;

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use stats::endpoint::{PageLocation, resolve_backend_url};
use stats::plan::{FixedQuery, LeaderboardKind, failure_summary};
use stats::player::Player;
use stats::query::{DEFAULT_SEASON, League};
use stats::quick::{QUICK_QUESTIONS, QuickRequest, find_quick_question};
use stats::{QueryError, StatsResponse};

use crate::backend::Backend;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unknown quick question: {0}")]
    UnknownQuickQuestion(String),
    #[error("{0}")]
    Query(#[from] QueryError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dugout-cli", about = "Baseball statistics backend CLI")]
struct Cli {
    /// Backend base URL; defaults to the local backend.
    #[arg(long, env = "DUGOUT_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "DUGOUT_TIMEOUT_SECS", default_value_t = stats::response::REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print the normalized envelope as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Batting,
    Pitching,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LeagueArg {
    Mlb,
    Al,
    Nl,
}

impl From<LeagueArg> for League {
    fn from(value: LeagueArg) -> Self {
        match value {
            LeagueArg::Mlb => League::Mlb,
            LeagueArg::Al => League::Al,
            LeagueArg::Nl => League::Nl,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a free-text question.
    Ask {
        query: String,
        #[arg(long, default_value_t = DEFAULT_SEASON)]
        season: u16,
    },
    /// Search players by name.
    Search { term: String },
    /// Season totals for one player.
    Season {
        player_id: u64,
        #[arg(long)]
        season: Option<u16>,
        #[arg(long, value_enum, default_value = "batting")]
        kind: Kind,
        #[arg(long, value_delimiter = ',', default_value = "avg,hr,ops")]
        metrics: Vec<String>,
    },
    /// Month-by-month series for one metric.
    Monthly {
        player_id: u64,
        #[arg(long, default_value_t = DEFAULT_SEASON)]
        season: u16,
        #[arg(long, default_value = "avg")]
        metric: String,
    },
    /// Performance with runners in scoring position.
    Risp {
        player_id: u64,
        #[arg(long)]
        season: Option<u16>,
        #[arg(long, value_delimiter = ',', default_value = "avg,ops")]
        metrics: Vec<String>,
    },
    /// Career totals for one player.
    Career {
        player_id: u64,
        #[arg(long, value_delimiter = ',', default_value = "avg,hr,ops")]
        metrics: Vec<String>,
    },
    /// League leaders.
    Leaderboard {
        #[arg(long, value_enum, default_value = "batting")]
        kind: Kind,
        #[arg(long)]
        season: Option<u16>,
        #[arg(long, value_enum, default_value = "mlb")]
        league: LeagueArg,
        #[arg(long)]
        metric: Option<String>,
    },
    /// Run a preset question, or list presets when no id is given.
    Quick { id: Option<String> },
}

/// A player known only by id.
fn player_ref(id: u64) -> Player {
    Player { id, name: format!("#{id}"), team: None, league: None }
}

fn leaderboard_query(kind: Kind, season: Option<u16>, league: League, metric: Option<String>) -> FixedQuery {
    let (kind, default_metric) = match kind {
        Kind::Batting => (LeaderboardKind::Batting, "hr"),
        Kind::Pitching => (LeaderboardKind::Pitching, "era"),
    };
    FixedQuery::Leaderboard {
        kind,
        season,
        league,
        metric_order: metric.unwrap_or_else(|| default_metric.to_owned()),
    }
}

/// Build the fixed query for a data subcommand; `None` for the others.
fn fixed_query(command: &Command) -> Result<Option<FixedQuery>, CliError> {
    let query = match command {
        Command::Season { player_id, season, kind: Kind::Batting, metrics } => {
            FixedQuery::SeasonBatting { player: player_ref(*player_id), season: *season, metrics: metrics.clone() }
        }
        Command::Season { player_id, season, kind: Kind::Pitching, metrics } => {
            FixedQuery::SeasonPitching { player: player_ref(*player_id), season: *season, metrics: metrics.clone() }
        }
        Command::Monthly { player_id, season, metric } => {
            FixedQuery::monthly(player_ref(*player_id), Some(*season), metric)?
        }
        Command::Risp { player_id, season, metrics } => {
            FixedQuery::Risp { player: player_ref(*player_id), season: *season, metrics: metrics.clone() }
        }
        Command::Career { player_id, metrics } => {
            FixedQuery::Career { player: player_ref(*player_id), metrics: metrics.clone() }
        }
        Command::Leaderboard { kind, season, league, metric } => {
            leaderboard_query(*kind, *season, (*league).into(), metric.clone())
        }
        Command::Ask { .. } | Command::Search { .. } | Command::Quick { .. } => return Ok(None),
    };
    Ok(Some(query))
}

fn emit(resp: &StatsResponse, query: Option<&FixedQuery>, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(resp)?);
    } else {
        print!("{}", print::render_response(resp, query));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let location = PageLocation::new("http:", "localhost");
    let resolved = resolve_backend_url(&location, cli.api_url.as_deref());
    tracing::debug!(base_url = %resolved.base_url, target = ?resolved.target, "backend resolved");
    let backend = Backend::new(&resolved.base_url, Duration::from_secs(cli.timeout_secs))?;

    match &cli.command {
        Command::Ask { query, season } => emit(&backend.ask(query, *season).await, None, cli.json),
        Command::Search { term } => {
            print!("{}", print::render_players(&backend.search(term).await));
            Ok(())
        }
        Command::Quick { id: None } => {
            print!("{}", print::render_quick_list(QUICK_QUESTIONS));
            Ok(())
        }
        Command::Quick { id: Some(id) } => {
            let question = find_quick_question(id).ok_or_else(|| CliError::UnknownQuickQuestion(id.clone()))?;
            match question.request()? {
                QuickRequest::Ask { query, season } => emit(&backend.ask(&query, season).await, None, cli.json),
                QuickRequest::Fixed(query) => emit(&backend.fixed(&query).await, Some(&query), cli.json),
            }
        }
        command => match fixed_query(command) {
            Ok(Some(query)) => emit(&backend.fixed(&query).await, Some(&query), cli.json),
            Ok(None) => Ok(()),
            Err(CliError::Query(err)) => {
                eprintln!("{}", failure_summary(None, &err));
                Err(CliError::Query(err))
            }
            Err(err) => Err(err),
        },
    }
}
