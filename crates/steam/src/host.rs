//! The machine the resolver looks at.
//!
//! Every registry and filesystem read goes through [`Host`] so the pipeline
//! can run against a fixture tree in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of the registry, home directory and filesystem.
///
/// Only the first two methods are required; the filesystem methods default
/// to `std::fs`.
pub trait Host {
    /// Returns the current user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Returns Steam's `InstallPath` registry value, if any.
    fn registry_install_path(&self) -> Option<PathBuf>;

    /// Returns true if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Lists the files directly inside `dir`, in filesystem order.
    ///
    /// Fails only if `dir` cannot be opened; unreadable entries are skipped.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)?.map(|entry| entry.map(|entry| entry.path()));
        Ok(readable_files(dir, entries))
    }

    /// Reads a whole file as text. Invalid UTF-8 is replaced, not rejected.
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Keeps the entries that could be read and are files.
fn readable_files(dir: &Path, entries: impl Iterator<Item = io::Result<PathBuf>>) -> Vec<PathBuf> {
    entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect()
}

/// The real machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn registry_install_path(&self) -> Option<PathBuf> {
        crate::registry::read_install_path()
    }
}

/// Host with a fixed home directory and registry value over the real
/// filesystem.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeHost {
    pub home: Option<PathBuf>,
    pub registry: Option<PathBuf>,
}

#[cfg(test)]
impl FakeHost {
    pub fn with_home(home: &Path) -> Self {
        Self {
            home: Some(home.to_path_buf()),
            registry: None,
        }
    }
}

#[cfg(test)]
impl Host for FakeHost {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn registry_install_path(&self) -> Option<PathBuf> {
        self.registry.clone()
    }
}
