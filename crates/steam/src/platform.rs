//! Per-OS discovery of the Steam root and its primary `steamapps` folder.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::SteamError;
use crate::host::Host;
use crate::library::STEAMAPPS_DIR;

/// Flatpak application id for Steam.
const FLATPAK_APP_ID: &str = "com.valvesoftware.Steam";

/// Operating system family with its own Steam layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Root from the registry.
    Windows,
    /// Root at a fixed path under the home directory, not verified.
    MacOs,
    /// Root found among native and Flatpak candidates.
    Linux,
}

impl Platform {
    /// Returns the platform this binary was built for.
    pub fn current() -> Result<Self, SteamError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Result<Self, SteamError> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(SteamError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Finds the Steam installation root.
    pub fn locate_root(&self, host: &dyn Host) -> Option<PathBuf> {
        match self {
            Platform::Windows => host.registry_install_path(),
            Platform::MacOs => host.home_dir().map(|home| {
                home.join("Library")
                    .join("Application Support")
                    .join("Steam")
            }),
            Platform::Linux => {
                let home = host.home_dir()?;
                first_dir(host, linux_root_candidates(&home))
            }
        }
    }

    /// Finds the primary `steamapps` directory under `root`.
    ///
    /// Only Linux checks that the directory exists.
    pub fn locate_steamapps(&self, host: &dyn Host, root: &Path) -> Option<PathBuf> {
        match self {
            Platform::Windows | Platform::MacOs => Some(root.join(STEAMAPPS_DIR)),
            Platform::Linux => first_dir(host, linux_steamapps_candidates(root)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

/// Linux Steam roots in priority order: native installs, then Flatpak.
pub fn linux_root_candidates(home: &Path) -> Vec<PathBuf> {
    let flatpak = home.join(".var").join("app").join(FLATPAK_APP_ID);
    [home.to_path_buf(), flatpak]
        .iter()
        .flat_map(|base| {
            [
                base.join(".local").join("share").join("Steam"),
                base.join(".steam").join("steam"),
                base.join(".steam").join("root"),
                base.join(".steam"),
            ]
        })
        .collect()
}

/// Places distributions put `steamapps` relative to the Steam root.
pub fn linux_steamapps_candidates(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join(STEAMAPPS_DIR),
        root.join("steam").join(STEAMAPPS_DIR),
        root.join("root").join(STEAMAPPS_DIR),
    ]
}

fn first_dir(host: &dyn Host, candidates: Vec<PathBuf>) -> Option<PathBuf> {
    let found = candidates.into_iter().find(|path| {
        let exists = host.is_dir(path);
        if !exists {
            tracing::debug!(path = %path.display(), "candidate directory missing");
        }
        exists
    });
    if let Some(path) = &found {
        tracing::debug!(path = %path.display(), "candidate directory found");
    }
    found
}
