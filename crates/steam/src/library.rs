//! Steam library folders.
//!
//! The primary `steamapps` directory lists the other libraries in
//! `libraryfolders.vdf`. Each declared root contributes its own
//! `steamapps` directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::SteamError;
use crate::host::Host;
use crate::vdf::{self, Key};

/// Name of the per-library apps directory.
pub const STEAMAPPS_DIR: &str = "steamapps";

/// File in the primary `steamapps` directory listing extra libraries.
pub const LIBRARY_FOLDERS_FILE: &str = "libraryfolders.vdf";

/// Ordered set of `steamapps` directories to search.
///
/// The primary directory is always first. The rest follow the order of
/// `libraryfolders.vdf`; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFolders {
    folders: Vec<PathBuf>,
}

impl LibraryFolders {
    /// Creates a set holding only the primary directory.
    pub fn from_primary(primary: impl Into<PathBuf>) -> Self {
        Self {
            folders: vec![primary.into()],
        }
    }

    /// Builds the set from the primary directory and its
    /// `libraryfolders.vdf`, if there is one.
    pub fn discover(host: &dyn Host, primary: impl Into<PathBuf>) -> Result<Self, SteamError> {
        let mut libraries = Self::from_primary(primary);

        let found = match find_file(host, libraries.primary(), LIBRARY_FOLDERS_FILE) {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(
                    primary = %libraries.primary().display(),
                    error = %e,
                    "cannot list primary library"
                );
                None
            }
        };
        let Some(file) = found else {
            tracing::debug!(
                primary = %libraries.primary().display(),
                "no libraryfolders.vdf, using primary library only"
            );
            return Ok(libraries);
        };

        let text = host.read_text(&file).map_err(|source| SteamError::Io {
            path: file.clone(),
            source,
        })?;
        let extra = parse_library_paths(&text);
        tracing::debug!(
            path = %file.display(),
            count = extra.len(),
            "read additional libraries"
        );
        libraries.folders.extend(extra);

        Ok(libraries)
    }

    /// Returns the primary `steamapps` directory.
    pub fn primary(&self) -> &Path {
        &self.folders[0]
    }

    /// Iterates the directories in search order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.folders.iter().map(PathBuf::as_path)
    }

    /// Returns the directories in search order.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.folders
    }

    /// Returns the number of directories, primary included.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Always false: the primary directory is always present.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// Returns the `steamapps` directory of every library root declared in
/// `libraryfolders.vdf` text.
pub fn parse_library_paths(text: &str) -> Vec<PathBuf> {
    vdf::extract_values(text, Key::Path)
        .into_iter()
        .map(|root| PathBuf::from(root).join(STEAMAPPS_DIR))
        .collect()
}

/// Finds a file directly inside `dir` whose name equals `name`, ignoring
/// ASCII case. Callers decide how loudly to report an unlistable `dir`.
pub(crate) fn find_file(host: &dyn Host, dir: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    let files = host.list_files(dir)?;
    Ok(files.into_iter().find(|path| {
        path.file_name()
            .map(|file_name| file_name.to_string_lossy().eq_ignore_ascii_case(name))
            .unwrap_or(false)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FakeHost;
    use std::fs;

    fn library_folders_vdf(paths: &[&str]) -> String {
        let mut text = String::from("\"libraryfolders\"\n{\n");
        for (i, path) in paths.iter().enumerate() {
            text.push_str(&format!(
                "\t\"{i}\"\n\t{{\n\t\t\"path\"\t\t\"{path}\"\n\t\t\"label\"\t\t\"\"\n\t}}\n"
            ));
        }
        text.push_str("}\n");
        text
    }

    #[test]
    fn primary_only_without_vdf() {
        let tmp = tempfile::tempdir().unwrap();
        let libraries = LibraryFolders::discover(&FakeHost::default(), tmp.path()).unwrap();
        assert_eq!(libraries.as_slice(), &[tmp.path().to_path_buf()]);
    }

    #[test]
    fn extra_libraries_follow_primary_in_file_order() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(LIBRARY_FOLDERS_FILE),
            library_folders_vdf(&["/a", "/b"]),
        )
        .unwrap();

        let libraries = LibraryFolders::discover(&FakeHost::default(), tmp.path()).unwrap();
        assert_eq!(
            libraries.as_slice(),
            &[
                tmp.path().to_path_buf(),
                PathBuf::from("/a/steamapps"),
                PathBuf::from("/b/steamapps"),
            ]
        );
    }

    #[test]
    fn vdf_name_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("LibraryFolders.VDF"),
            library_folders_vdf(&["/mnt/games"]),
        )
        .unwrap();

        let libraries = LibraryFolders::discover(&FakeHost::default(), tmp.path()).unwrap();
        assert_eq!(libraries.as_slice().len(), 2);
        assert_eq!(libraries.as_slice()[1], PathBuf::from("/mnt/games/steamapps"));
    }

    #[test]
    fn primary_stays_first_even_if_listed() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("Steam");
        let primary = root.join("steamapps");
        fs::create_dir_all(&primary).unwrap();
        fs::write(
            primary.join(LIBRARY_FOLDERS_FILE),
            library_folders_vdf(&["/mnt/games", root.to_str().unwrap()]),
        )
        .unwrap();

        let libraries = LibraryFolders::discover(&FakeHost::default(), &primary).unwrap();
        assert_eq!(libraries.primary(), primary.as_path());
        assert_eq!(
            libraries.as_slice(),
            &[primary.clone(), PathBuf::from("/mnt/games/steamapps"), primary]
        );
    }

    #[test]
    fn vdf_without_paths() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(LIBRARY_FOLDERS_FILE), "\"libraryfolders\"\n{\n}\n").unwrap();

        let libraries = LibraryFolders::discover(&FakeHost::default(), tmp.path()).unwrap();
        assert_eq!(libraries.as_slice(), &[tmp.path().to_path_buf()]);
    }

    #[test]
    fn missing_primary_is_just_primary() {
        let tmp = tempfile::tempdir().unwrap();
        let primary = tmp.path().join("steamapps");
        let libraries = LibraryFolders::discover(&FakeHost::default(), &primary).unwrap();
        assert_eq!(libraries.as_slice(), &[primary]);
    }

    #[test]
    fn len_counts_primary_and_extras() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(LibraryFolders::from_primary(tmp.path()).len(), 1);

        fs::write(
            tmp.path().join(LIBRARY_FOLDERS_FILE),
            library_folders_vdf(&["/a", "/b", "/c"]),
        )
        .unwrap();
        let libraries = LibraryFolders::discover(&FakeHost::default(), tmp.path()).unwrap();
        assert_eq!(libraries.len(), 4);
        assert!(!libraries.is_empty());
        assert_eq!(libraries.iter().count(), libraries.len());
    }

    #[test]
    fn find_file_ignores_case() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("APPMANIFEST_123.ACF"), "").unwrap();

        let found = find_file(&FakeHost::default(), tmp.path(), "appmanifest_123.acf").unwrap();
        assert_eq!(found, Some(tmp.path().join("APPMANIFEST_123.ACF")));
    }

    #[test]
    fn find_file_in_missing_dir_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let result = find_file(
            &FakeHost::default(),
            &tmp.path().join("gone"),
            "appmanifest_123.acf",
        );
        assert!(result.is_err());
    }
}
