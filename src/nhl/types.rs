use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::{
    cli::types::{PlayerId, Season, TeamId},
    error::NhlError,
    nhl::age::{compute_age, parse_birth_date, AgeCutoff, PlayerAge},
    Result,
};


/// `firstYearOfPlay` comes back as a string ("1993"), but accept a bare number too.
fn de_season_year<'de, D>(deserializer: D) -> std::result::Result<Season, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u16),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(year) => Ok(Season::new(year)),
        Raw::Text(text) => text.parse().map_err(D::Error::custom),
    }
}

/// Top-level envelope for `/api/v1/teams`
#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(rename = "firstYearOfPlay", deserialize_with = "de_season_year")]
    pub first_year_of_play: Season,
}

/// Envelope for `/api/v1/teams/{id}?expand=team.roster`
#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    #[serde(default)]
    pub teams: Vec<RosterTeam>,
}

#[derive(Debug, Deserialize)]
pub struct RosterTeam {
    #[serde(default)]
    pub roster: Option<RosterList>,
}

#[derive(Debug, Deserialize)]
pub struct RosterList {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

impl RosterEnvelope {
    /// Roster of the first (only) team in the response.
    pub fn into_roster(self, team_id: TeamId, season: Season) -> Result<Vec<RosterEntry>> {
        let team = self.teams.into_iter().next().ok_or_else(|| {
            NhlError::not_found(format!("team {} in roster response", team_id))
        })?;
        let roster = team.roster.ok_or_else(|| {
            NhlError::not_found(format!("roster for team {} in {}", team_id, season.label()))
        })?;
        Ok(roster.roster)
    }
}

/// One player slot on a team's season roster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub person: PlayerRef,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<String>,
}

/// Reference to a player: id plus the API link used to fetch their records.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    pub link: String,
}

/// Envelope for `/api/v1/people/{id}`
#[derive(Debug, Deserialize)]
pub struct PeopleEnvelope {
    #[serde(default)]
    pub people: Vec<Person>,
}

/// Raw personal record; every field here is required.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub height: String,
    pub weight: u32,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
}

/// Bio columns of an output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPersonalInfo {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub height: String,
    pub weight: u32,
    pub age: PlayerAge,
}

impl PlayerPersonalInfo {
    pub fn from_person(person: Person, season: Season, cutoff: AgeCutoff) -> Result<Self> {
        let birth_date = parse_birth_date(&person.birth_date)?;
        let age = compute_age(birth_date, season, cutoff)?;

        Ok(Self {
            id: person.id,
            full_name: person.full_name,
            height: person.height,
            weight: person.weight,
            age,
        })
    }
}

/// Envelope for `/api/v1/people/{id}/stats?stats=statsSingleSeason`
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(default)]
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Deserialize)]
pub struct StatGroup {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub season: Option<String>,
    pub stat: PlayerSeasonalStats,
}

impl StatsEnvelope {
    /// Stats of the first split. An empty split list means the player has no
    /// stats recorded for the season.
    pub fn into_stats(self, player_id: PlayerId, season: Season) -> Result<PlayerSeasonalStats> {
        self.stats
            .into_iter()
            .next()
            .and_then(|group| group.splits.into_iter().next())
            .map(|split| split.stat)
            .ok_or_else(|| {
                NhlError::not_found(format!("stats for player {} in {}", player_id, season.label()))
            })
    }
}

/// A single stat value. Upstream mixes integers, floats and strings (e.g. `"timeOnIce": "1011:40"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl StatValue {
    fn from_json(key: &str, value: Value) -> std::result::Result<Option<Self>, String> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(StatValue::Bool(b))),
            Value::String(s) => Ok(Some(StatValue::Text(s))),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Some(StatValue::Int(i))),
                None => n
                    .as_f64()
                    .map(|f| Some(StatValue::Float(f)))
                    .ok_or_else(|| format!("stat {key} is not representable: {n}")),
            },
            Value::Array(_) | Value::Object(_) => Err(format!("stat {key} is not a scalar")),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(i) => write!(f, "{i}"),
            StatValue::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            StatValue::Float(x) => write!(f, "{x}"),
            StatValue::Text(s) => f.write_str(s),
            StatValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Single-season stats in upstream key order. Null values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PlayerSeasonalStats {
    pub entries: Vec<(String, StatValue)>,
}

impl PlayerSeasonalStats {
    pub fn get(&self, key: &str) -> Option<&StatValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for PlayerSeasonalStats {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            if let Some(stat) = StatValue::from_json(&key, value)? {
                entries.push((key, stat));
            }
        }
        Ok(Self { entries })
    }
}

impl<const N: usize> From<[(&str, StatValue); N]> for PlayerSeasonalStats {
    fn from(pairs: [(&str, StatValue); N]) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}
