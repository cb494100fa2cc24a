//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameDate, Week};

/// Optional feed filters. Values are passed through to the query string as-is.
#[derive(Debug, Default, Args)]
pub struct GamelogFilters {
    /// Team abbreviation or id, comma separated (e.g. `NE,NYJ`).
    #[clap(long)]
    pub team: Option<String>,

    /// Player slug or id, comma separated.
    #[clap(long)]
    pub player: Option<String>,

    /// Position (e.g. `QB`).
    #[clap(long)]
    pub position: Option<String>,

    /// Game id or `YYYYMMDD-AWAY-HOME`.
    #[clap(long)]
    pub game: Option<String>,

    /// Stat names to include (e.g. `passYards,rushYards`).
    #[clap(long)]
    pub stats: Option<String>,

    /// Sort expression (e.g. `stats.passing.passYards.D`).
    #[clap(long)]
    pub sort: Option<String>,

    /// Skip this many results.
    #[clap(long)]
    pub offset: Option<u32>,

    /// Return at most this many results.
    #[clap(long)]
    pub limit: Option<u32>,

    /// Ask the API for fresh data even if unchanged (`true`/`false`).
    #[clap(long)]
    pub force: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch daily player gamelogs for a date and week.
    Gamelogs {
        /// Game date as YYYYMMDD.
        #[clap(long, short)]
        date: GameDate,

        /// Week number (1-40).
        #[clap(long, short)]
        week: Week,

        /// Season (e.g. `2018-2019-regular`); overrides config.
        #[clap(long, short)]
        season: Option<String>,

        #[clap(flatten)]
        filters: GamelogFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the effective configuration (credential redacted).
    Config,
}

#[derive(Debug, Parser)]
#[clap(name = "msf-gamelogs", about = "MySportsFeeds player gamelogs CLI")]
pub struct Msf {
    /// Enable debug logging (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
