//! The full resolution pipeline: root, `steamapps`, libraries, manifest.

use std::path::PathBuf;

use crate::SteamError;
use crate::host::{Host, SystemHost};
use crate::library::LibraryFolders;
use crate::manifest::{self, AppManifest};
use crate::platform::Platform;

/// Resolves Steam paths for one platform over one [`Host`].
///
/// Holds no results between calls; each call starts from the root again.
#[derive(Debug, Clone)]
pub struct SteamLocator<H: Host = SystemHost> {
    platform: Platform,
    host: H,
    steam_root: Option<PathBuf>,
}

impl SteamLocator<SystemHost> {
    /// Creates a locator for the running OS and the real machine.
    pub fn system() -> Result<Self, SteamError> {
        Ok(Self::new(Platform::current()?, SystemHost))
    }
}

impl<H: Host> SteamLocator<H> {
    /// Creates a locator for `platform` reading through `host`.
    pub fn new(platform: Platform, host: H) -> Self {
        Self {
            platform,
            host,
            steam_root: None,
        }
    }

    /// Uses `root` as the Steam root instead of detecting it.
    pub fn with_steam_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.steam_root = Some(root.into());
        self
    }

    /// Returns the platform this locator resolves for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the Steam installation root.
    pub fn find_steam_directory(&self) -> Option<PathBuf> {
        if let Some(root) = &self.steam_root {
            tracing::debug!(path = %root.display(), "using configured steam root");
            return Some(root.clone());
        }
        let root = self.platform.locate_root(&self.host);
        if root.is_none() {
            tracing::debug!(platform = %self.platform, "steam root not found");
        }
        root
    }

    /// Returns the primary `steamapps` directory.
    pub fn find_steamapps_directory(&self) -> Option<PathBuf> {
        let root = self.find_steam_directory()?;
        self.platform.locate_steamapps(&self.host, &root)
    }

    /// Returns every `steamapps` directory to search, primary first.
    pub fn library_folders(&self) -> Result<Option<LibraryFolders>, SteamError> {
        let Some(primary) = self.find_steamapps_directory() else {
            return Ok(None);
        };
        LibraryFolders::discover(&self.host, primary).map(Some)
    }

    /// Returns the path of the manifest for `app_id`.
    pub fn find_manifest(&self, app_id: &str) -> Result<Option<PathBuf>, SteamError> {
        let Some(libraries) = self.library_folders()? else {
            return Ok(None);
        };
        Ok(manifest::find_manifest(&self.host, &libraries, app_id))
    }

    /// Finds and reads the manifest for `app_id`.
    pub fn load_manifest(&self, app_id: &str) -> Result<Option<AppManifest>, SteamError> {
        match self.find_manifest(app_id)? {
            Some(path) => AppManifest::load(&self.host, &path).map(Some),
            None => Ok(None),
        }
    }

    /// Returns `<library>/common/<installdir>` for `app_id`.
    pub fn find_install_directory(&self, app_id: &str) -> Result<Option<PathBuf>, SteamError> {
        let Some(manifest) = self.load_manifest(app_id)? else {
            return Ok(None);
        };

        let install_path = manifest.install_path();
        let install_path =
            std::path::absolute(&install_path).map_err(|source| SteamError::Io {
                path: install_path.clone(),
                source,
            })?;
        tracing::debug!(app_id, path = %install_path.display(), "install directory resolved");
        Ok(Some(install_path))
    }

    /// Returns true if `app_id` is installed for a compatibility layer.
    pub fn is_proton_game(&self, app_id: &str) -> Result<bool, SteamError> {
        let manifest = self
            .load_manifest(app_id)?
            .ok_or_else(|| SteamError::NotInstalled(app_id.to_string()))?;

        let source = manifest.platform_override_source();
        let proton = manifest::uses_compatibility_layer(&source);
        tracing::debug!(app_id, source = %source, proton, "platform override checked");
        Ok(proton)
    }
}
