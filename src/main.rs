mod collect;
mod fetcher;
mod registry;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::fetcher::Fetcher;

/// Collect AI news feeds into a markdown headline digest.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to write the markdown digest
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; the digest itself only ever goes to the
    // output file
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_headlines=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let registry = registry::default_registry();
    info!("Collecting headlines from {} feeds", registry.len());

    let fetcher = Fetcher::new();
    let items = collect::aggregate(&fetcher, &registry, collect::PER_FEED_LIMIT).await;
    let selected = collect::select_top(items, collect::MAX_ITEMS);
    info!("Selected {} headlines", selected.len());

    let markdown = render::to_markdown(&selected);
    tokio::fs::write(&cli.output, markdown)
        .await
        .with_context(|| format!("Failed to write digest to {}", cli.output.display()))?;

    info!("Wrote digest to {}", cli.output.display());
    Ok(())
}
