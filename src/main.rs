use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logsift::{run, Cli};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let summary = run::execute(&cli)?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "run complete"
    );
    Ok(())
}
