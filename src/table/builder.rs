//! Team → season → roster → player traversal that accumulates output rows.
//!
//! Failures are skipped at the smallest unit that failed: a failed roster
//! fetch skips that team-season, a failed info or stats fetch skips that
//! player. Only listing the teams can fail the whole build.

use std::collections::BTreeMap;

use crate::{
    cli::types::{PlayerId, Season, TeamId},
    error::{FailureKind, NhlError},
    nhl::{types::RosterEntry, StatsSource},
    table::{Row, Table},
    Result,
};

/// A unit of work that was skipped, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub team: TeamId,
    pub season: Season,
    /// `None` when the whole team-season was skipped.
    pub player: Option<PlayerId>,
    pub kind: FailureKind,
    pub reason: String,
}

/// Rows in traversal order plus every skip recorded on the way.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub rows: Vec<Row>,
    pub skipped: Vec<Skip>,
    pub team_seasons: usize,
}

impl BuildReport {
    pub fn to_table(&self) -> Table {
        Table::from_rows(&self.rows)
    }

    /// Skip counts per failure kind.
    pub fn skips_by_kind(&self) -> BTreeMap<FailureKind, usize> {
        let mut counts = BTreeMap::new();
        for skip in &self.skipped {
            *counts.entry(skip.kind).or_insert(0) += 1;
        }
        counts
    }
}

pub struct TableBuilder<'a, S> {
    source: &'a S,
    last_season: Season,
}

impl<'a, S: StatsSource> TableBuilder<'a, S> {
    pub fn new(source: &'a S, last_season: Season) -> Self {
        Self {
            source,
            last_season,
        }
    }

    /// Walk every team and season, fetching one request at a time.
    pub async fn build(&self) -> Result<BuildReport> {
        let teams = self.source.teams().await?;
        let mut report = BuildReport::default();

        for team in &teams {
            for season in team.first_year_of_play.through(self.last_season) {
                tracing::info!("{} {}", team.name, season);
                report.team_seasons += 1;

                let roster = match self.source.roster(team.id, season).await {
                    Ok(roster) => roster,
                    Err(e) => {
                        tracing::debug!("Skipping {} {}: {}", team.name, season.label(), e);
                        report.skipped.push(skip(team.id, season, None, &e));
                        continue;
                    }
                };

                for entry in &roster {
                    match self.player_row(entry, season).await {
                        Ok(row) => {
                            tracing::debug!("{}", row.info.full_name);
                            report.rows.push(row);
                        }
                        Err(e) => {
                            tracing::debug!(
                                "Skipping player {} for {}: {}",
                                entry.person.id,
                                season.label(),
                                e
                            );
                            report
                                .skipped
                                .push(skip(team.id, season, Some(entry.person.id), &e));
                        }
                    }
                }
            }
        }

        tracing::info!(
            "Built {} rows across {} team-seasons ({} skipped)",
            report.rows.len(),
            report.team_seasons,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Both fetches must succeed; no partial rows.
    async fn player_row(&self, entry: &RosterEntry, season: Season) -> Result<Row> {
        let info = self.source.personal_info(&entry.person, season).await?;
        let stats = self.source.seasonal_stats(&entry.person, season).await?;
        Ok(Row::new(info, stats, season))
    }
}

fn skip(team: TeamId, season: Season, player: Option<PlayerId>, error: &NhlError) -> Skip {
    Skip {
        team,
        season,
        player,
        kind: error.kind(),
        reason: error.to_string(),
    }
}
