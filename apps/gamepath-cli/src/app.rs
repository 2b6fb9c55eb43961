//! Runs one command against a [`SteamLocator`].

use anyhow::anyhow;
use gamepath_steam::{Host, SteamLocator};

use crate::cli::Command;

/// Runs `command` and returns the lines to print.
pub fn run<H: Host>(command: &Command, locator: &SteamLocator<H>) -> anyhow::Result<Vec<String>> {
    let line = match command {
        Command::Root => locator
            .find_steam_directory()
            .ok_or_else(|| anyhow!("steam installation not found"))?
            .display()
            .to_string(),
        Command::Steamapps => locator
            .find_steamapps_directory()
            .ok_or_else(|| anyhow!("steamapps directory not found"))?
            .display()
            .to_string(),
        Command::Libraries => {
            let libraries = locator
                .library_folders()?
                .ok_or_else(|| anyhow!("steamapps directory not found"))?;
            return Ok(libraries
                .iter()
                .map(|path| path.display().to_string())
                .collect());
        }
        Command::Manifest { app_id } => locator
            .find_manifest(app_id)?
            .ok_or_else(|| anyhow!("no manifest for app {app_id}"))?
            .display()
            .to_string(),
        Command::InstallDir { app_id } => locator
            .find_install_directory(app_id)?
            .ok_or_else(|| anyhow!("app {app_id} not found in any steam library"))?
            .display()
            .to_string(),
        Command::Proton { app_id } => locator.is_proton_game(app_id)?.to_string(),
    };
    Ok(vec![line])
}
