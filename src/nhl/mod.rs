//! NHL stats API access.
//!
//! - `age`: hockey "Years-Days" age calculation
//! - `http`: reqwest client for the stats API
//! - `types`: response envelopes and the records extracted from them

pub mod age;
pub mod http;
pub mod types;

use crate::{
    cli::types::{Season, TeamId},
    Result,
};
use types::{PlayerPersonalInfo, PlayerRef, PlayerSeasonalStats, RosterEntry, Team};

/// Everything the table builder needs from upstream.
///
/// [`http::NhlClient`] is the real implementation; tests substitute stubs.
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    /// All teams, in upstream listing order.
    async fn teams(&self) -> Result<Vec<Team>>;

    /// Roster of `team` for `season`.
    async fn roster(&self, team: TeamId, season: Season) -> Result<Vec<RosterEntry>>;

    /// Bio fields plus age as of the season's cutoff date.
    async fn personal_info(&self, player: &PlayerRef, season: Season)
        -> Result<PlayerPersonalInfo>;

    /// Single-season aggregate stats.
    async fn seasonal_stats(
        &self,
        player: &PlayerRef,
        season: Season,
    ) -> Result<PlayerSeasonalStats>;
}
