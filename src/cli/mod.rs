//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::Season;

/// Build a CSV of NHL player bio and single-season stats for every team and season.
///
/// With no arguments the run covers every team from its first year of play
/// through the 2020-2021 season, with ages as of January 31.
#[derive(Debug, Parser)]
#[clap(name = "nhl-roster-table", about = "NHL player/season table builder")]
pub struct NhlCli {
    /// Output CSV path.
    #[clap(long, short, default_value = "panthers_players_table.csv")]
    pub output: PathBuf,

    /// Last season to fetch (inclusive), as the year it started.
    #[clap(long, default_value_t = Season::default())]
    pub last_season: Season,

    /// Month of the age cutoff date, in the year the season ends.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub cutoff_month: u32,

    /// Day of the age cutoff date.
    #[clap(long, default_value_t = 31, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub cutoff_day: u32,

    /// Stats API base URL (or set `NHL_STATS_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Log every player and every skipped fetch.
    #[clap(long, short)]
    pub verbose: bool,
}
