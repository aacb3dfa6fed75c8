//! Command implementations for the NHL roster table CLI

use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    cli::types::Season,
    error::FailureKind,
    nhl::{
        age::AgeCutoff,
        http::{NhlClient, NHL_STATS_BASE_URL},
        StatsSource,
    },
    table::{builder::TableBuilder, SEASON_COLUMN},
    Result, BASE_URL_ENV_VAR,
};


/// Position the season label is moved to in the output.
pub const SEASON_COLUMN_POSITION: usize = 1;

/// Parameters for the build-table command
#[derive(Debug, Clone)]
pub struct BuildTableParams {
    pub output: PathBuf,
    pub last_season: Season,
    pub age_cutoff: AgeCutoff,
    pub base_url: Option<String>,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub rows: usize,
    pub team_seasons: usize,
    pub skipped: BTreeMap<FailureKind, usize>,
    pub output: PathBuf,
}

/// Base URL from the argument, else `NHL_STATS_BASE_URL`, else the public API.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| NHL_STATS_BASE_URL.to_string())
}

/// Handle the build-table command against the live stats API
pub async fn handle_build_table(params: BuildTableParams) -> Result<BuildSummary> {
    let base_url = resolve_base_url(params.base_url.clone());
    tracing::info!("Using stats API at {}", base_url);

    let client = NhlClient::new(base_url, params.age_cutoff)?;
    let summary = build_table(&client, &params).await?;

    println!(
        "✓ Wrote {} rows to {}",
        summary.rows,
        summary.output.display()
    );
    if !summary.skipped.is_empty() {
        let parts: Vec<String> = summary
            .skipped
            .iter()
            .map(|(kind, count)| format!("{} {}", count, kind))
            .collect();
        println!("Skipped: {}", parts.join(", "));
    }

    Ok(summary)
}

/// Build the table from `source`, move `season` to the second column and write the CSV.
///
/// A run where every fetch was skipped still succeeds and leaves an empty file.
pub async fn build_table<S: StatsSource>(
    source: &S,
    params: &BuildTableParams,
) -> Result<BuildSummary> {
    let report = TableBuilder::new(source, params.last_season)
        .build()
        .await?;

    let table = report.to_table();
    if table.is_empty() {
        tracing::warn!("No player rows were fetched; writing an empty file");
        table.write_csv_file(&params.output)?;
    } else {
        table
            .move_column(SEASON_COLUMN, SEASON_COLUMN_POSITION)?
            .write_csv_file(&params.output)?;
    }

    Ok(BuildSummary {
        rows: report.rows.len(),
        team_seasons: report.team_seasons,
        skipped: report.skips_by_kind(),
        output: params.output.clone(),
    })
}
