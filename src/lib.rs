//! NHL roster table library
//!
//! Fetches every NHL team's season rosters from the public stats API and
//! flattens them into one table of player bio and single-season stats,
//! written as CSV.
//!
//! ## Features
//!
//! - **Traversal**: teams → seasons (first year of play through a last season) → roster → players
//! - **Hockey ages**: player age in "Years-Days" as of January 31 of each season
//! - **Skip reporting**: failed rosters or players are skipped and counted by failure kind
//! - **CSV output**: union of all stat columns, `season` as the second column
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_roster_table::{
//!     commands::{handle_build_table, BuildTableParams},
//!     nhl::age::AgeCutoff,
//!     Season,
//! };
//!
//! # async fn example() -> nhl_roster_table::Result<()> {
//! let summary = handle_build_table(BuildTableParams {
//!     output: "players.csv".into(),
//!     last_season: Season::new(2020),
//!     age_cutoff: AgeCutoff::default(),
//!     base_url: None,
//! })
//! .await?;
//! println!("{} rows", summary.rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a mirror of the stats API:
//! ```bash
//! export NHL_STATS_BASE_URL=http://localhost:8080
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod nhl;
pub mod table;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, TeamId};
pub use error::{FailureKind, NhlError, Result};
pub use nhl::StatsSource;

pub const BASE_URL_ENV_VAR: &str = "NHL_STATS_BASE_URL";
