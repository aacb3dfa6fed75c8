//! Entry point: parse CLI, set up logging and run the table build.

use anyhow::Context;
use clap::Parser;
use nhl_roster_table::{
    cli::NhlCli,
    commands::{handle_build_table, BuildTableParams},
    nhl::age::AgeCutoff,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = NhlCli::parse();

    let default_filter = if cli.verbose {
        "nhl_roster_table=debug"
    } else {
        "nhl_roster_table=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let output = cli.output.clone();
    handle_build_table(BuildTableParams {
        output: cli.output,
        last_season: cli.last_season,
        age_cutoff: AgeCutoff::new(cli.cutoff_month, cli.cutoff_day),
        base_url: cli.base_url,
    })
    .await
    .with_context(|| format!("failed to build {}", output.display()))?;

    Ok(())
}
