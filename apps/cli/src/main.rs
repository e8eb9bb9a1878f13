//! Entry point for the `lifo` binary

mod cli;
mod config;
mod menu;
mod render;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let settings = config::load(&args).context("failed to load configuration")?;
    init_logging(&settings.log.level)?;
    tracing::debug!(?settings, "configuration resolved");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::Session::new(stdin.lock(), stdout.lock())
        .run(settings.stack.initial_capacity)
        .context("menu session failed")?;
    Ok(())
}

/// Install the fmt subscriber on stderr; the menu conversation owns stdout.
fn init_logging(filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
