//! App manifests (`appmanifest_<id>.acf`).

use std::path::{Path, PathBuf};

use crate::SteamError;
use crate::host::Host;
use crate::library::{self, LibraryFolders};
use crate::vdf::{self, Key};

/// Directory inside a library that holds game folders.
pub const COMMON_DIR: &str = "common";

/// Override source that means the native Linux build is installed.
const NATIVE_LINUX_SOURCE: &str = "linux";

/// Returns the manifest file name for `app_id`.
pub fn manifest_file_name(app_id: &str) -> String {
    format!("appmanifest_{app_id}.acf")
}

/// Finds the manifest for `app_id` in the first library that has one.
pub fn find_manifest(host: &dyn Host, libraries: &LibraryFolders, app_id: &str) -> Option<PathBuf> {
    let name = manifest_file_name(app_id);
    let found = libraries.iter().enumerate().find_map(|(index, library)| {
        match library::find_file(host, library, &name) {
            Ok(found) => found,
            // The primary directory is unverified on Windows and macOS.
            Err(e) if index == 0 => {
                tracing::debug!(library = %library.display(), error = %e, "cannot list primary library");
                None
            }
            Err(e) => {
                tracing::warn!(library = %library.display(), error = %e, "skipping unreadable library");
                None
            }
        }
    });

    match &found {
        Some(path) => tracing::debug!(app_id, path = %path.display(), "manifest found"),
        None => tracing::debug!(app_id, "manifest not found in any library"),
    }
    found
}

/// Returns true if a `platform_override_source` value means the game runs
/// through a compatibility layer.
pub fn uses_compatibility_layer(source: &str) -> bool {
    !matches!(source, "" | NATIVE_LINUX_SOURCE)
}

/// Raw text of an app manifest and where it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppManifest {
    path: PathBuf,
    contents: String,
}

impl AppManifest {
    /// Reads the manifest at `path`.
    pub fn load(host: &dyn Host, path: &Path) -> Result<Self, SteamError> {
        let contents = host.read_text(path).map_err(|source| SteamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, contents))
    }

    /// Wraps manifest text that was already read.
    pub fn from_text(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Returns the manifest file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the `installdir` value, or an empty string.
    pub fn install_dir(&self) -> String {
        vdf::extract_value(&self.contents, Key::InstallDir)
    }

    /// Returns the `platform_override_source` value, or an empty string.
    pub fn platform_override_source(&self) -> String {
        vdf::extract_value(&self.contents, Key::PlatformOverrideSource)
    }

    /// Returns the `steamapps` directory holding this manifest.
    pub fn library_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Returns `<library>/common/<installdir>`.
    pub fn install_path(&self) -> PathBuf {
        self.library_dir().join(COMMON_DIR).join(self.install_dir())
    }

    /// Returns true if the game is installed for a compatibility layer.
    pub fn uses_compatibility_layer(&self) -> bool {
        uses_compatibility_layer(&self.platform_override_source())
    }
}
