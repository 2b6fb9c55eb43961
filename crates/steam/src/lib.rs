//! Steam install discovery for gamepath.
//!
//! Resolves where Steam keeps a game given only its numeric app id, and
//! whether that game runs through Proton. Nothing here writes to disk or
//! caches between calls: every operation re-reads the registry and the
//! filesystem.

pub mod host;
pub mod library;
pub mod locator;
pub mod manifest;
pub mod platform;
mod registry;
pub mod vdf;

use std::path::PathBuf;

// Re-export primary types.
pub use host::{Host, SystemHost};
pub use library::LibraryFolders;
pub use locator::SteamLocator;
pub use manifest::{AppManifest, manifest_file_name, uses_compatibility_layer};
pub use platform::Platform;

/// Errors for Steam operations.
///
/// A lookup that simply finds nothing is not an error; those operations
/// return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("{0} is not installed")]
    NotInstalled(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the Steam installation root for this machine.
pub fn find_steam_directory() -> Result<Option<PathBuf>, SteamError> {
    Ok(SteamLocator::system()?.find_steam_directory())
}

/// Returns the primary `steamapps` directory for this machine.
pub fn find_steamapps_directory() -> Result<Option<PathBuf>, SteamError> {
    Ok(SteamLocator::system()?.find_steamapps_directory())
}

/// Returns the install directory of `app_id`, or `None` if Steam has no
/// manifest for it.
pub fn find_install_directory(app_id: &str) -> Result<Option<PathBuf>, SteamError> {
    SteamLocator::system()?.find_install_directory(app_id)
}

/// Returns true if `app_id` is set up to run through a compatibility layer.
///
/// Fails with [`SteamError::NotInstalled`] when no manifest exists.
pub fn is_proton_game(app_id: &str) -> Result<bool, SteamError> {
    SteamLocator::system()?.is_proton_game(app_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_installed_message() {
        let err = SteamError::NotInstalled("1966720".into());
        assert_eq!(err.to_string(), "1966720 is not installed");
    }

    #[test]
    fn unsupported_platform_message() {
        let err = SteamError::UnsupportedPlatform("freebsd".into());
        assert_eq!(err.to_string(), "unsupported operating system: freebsd");
    }

    #[test]
    fn io_error_names_path() {
        let err = SteamError::Io {
            path: PathBuf::from("/steam/steamapps/libraryfolders.vdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("libraryfolders.vdf"));
        assert!(msg.contains("denied"));
    }
}
