//! gamepath command line entry point.

mod app;
mod cli;
mod config;

use clap::Parser;
use gamepath_steam::SteamLocator;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout carries only the result.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load(cli.config.as_deref())?;

    let mut locator = SteamLocator::system()?;
    if let Some(root) = config.steam_root(cli.steam_dir.clone()) {
        locator = locator.with_steam_root(root);
    }
    tracing::debug!(platform = %locator.platform(), command = ?cli.command, "resolving");

    for line in app::run(&cli.command, &locator)? {
        println!("{line}");
    }
    Ok(())
}
