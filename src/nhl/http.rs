//! HTTP client for the NHL stats API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    cli::types::{Season, TeamId},
    error::NhlError,
    nhl::{
        age::AgeCutoff,
        types::{
            PeopleEnvelope, PlayerPersonalInfo, PlayerRef, PlayerSeasonalStats, RosterEntry,
            RosterEnvelope, StatsEnvelope, Team, TeamsEnvelope,
        },
        StatsSource,
    },
    Result,
};

#[cfg(test)]
mod tests;

/// Default base URL of the NHL stats API.
pub const NHL_STATS_BASE_URL: &str = "https://statsapi.web.nhl.com";

const USER_AGENT: &str = concat!("nhl-roster-table/", env!("CARGO_PKG_VERSION"));

pub struct NhlClient {
    http: Client,
    base_url: String,
    age_cutoff: AgeCutoff,
}

impl NhlClient {
    /// Build a client for `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, age_cutoff: AgeCutoff) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            age_cutoff,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and decode the body.
    ///
    /// 404 maps to [`NhlError::NotFound`]; other non-success statuses surface as HTTP errors.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {} {:?}", url, params);

        let response = self.http.get(&url).query(params).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(NhlError::not_found(url));
        }

        let body = response.error_for_status()?.json::<Value>().await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let envelope: TeamsEnvelope = self.get_json("/api/v1/teams/", &[]).await?;
        Ok(envelope.teams)
    }

    pub async fn fetch_roster(&self, team_id: TeamId, season: Season) -> Result<Vec<RosterEntry>> {
        let path = format!("/api/v1/teams/{}", team_id);
        let params = [
            ("expand", "team.roster".to_string()),
            ("season", season.api_param()),
        ];

        let envelope: RosterEnvelope = self.get_json(&path, &params).await?;
        envelope.into_roster(team_id, season)
    }

    pub async fn fetch_personal_info(
        &self,
        player: &PlayerRef,
        season: Season,
    ) -> Result<PlayerPersonalInfo> {
        let envelope: PeopleEnvelope = self.get_json(&player.link, &[]).await?;
        let person = envelope
            .people
            .into_iter()
            .next()
            .ok_or_else(|| NhlError::malformed(format!("no people record at {}", player.link)))?;

        PlayerPersonalInfo::from_person(person, season, self.age_cutoff)
    }

    pub async fn fetch_seasonal_stats(
        &self,
        player: &PlayerRef,
        season: Season,
    ) -> Result<PlayerSeasonalStats> {
        let path = format!("{}/stats", player.link);
        let params = [
            ("stats", "statsSingleSeason".to_string()),
            ("season", season.api_param()),
        ];

        let envelope: StatsEnvelope = self.get_json(&path, &params).await?;
        envelope.into_stats(player.id, season)
    }
}

impl StatsSource for NhlClient {
    async fn teams(&self) -> Result<Vec<Team>> {
        self.fetch_teams().await
    }

    async fn roster(&self, team: TeamId, season: Season) -> Result<Vec<RosterEntry>> {
        self.fetch_roster(team, season).await
    }

    async fn personal_info(
        &self,
        player: &PlayerRef,
        season: Season,
    ) -> Result<PlayerPersonalInfo> {
        self.fetch_personal_info(player, season).await
    }

    async fn seasonal_stats(
        &self,
        player: &PlayerRef,
        season: Season,
    ) -> Result<PlayerSeasonalStats> {
        self.fetch_seasonal_stats(player, season).await
    }
}
