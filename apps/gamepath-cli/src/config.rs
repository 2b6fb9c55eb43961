//! CLI configuration.
//!
//! Stored as TOML at `<config dir>/gamepath/config.toml`:
//! - Linux: `~/.config/gamepath/config.toml`
//! - macOS: `~/Library/Application Support/gamepath/config.toml`
//! - Windows: `%APPDATA%/gamepath/config.toml`
//!
//! The file at the default location is optional. An explicit `--config`
//! path must exist. The tool never writes the file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Steam installation root to use instead of auto-detection.
    #[serde(default)]
    pub steam_dir: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from `path`, or the default location.
    ///
    /// A missing file at the default location yields the defaults; a
    /// missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match config_path() {
                Some(path) if path.exists() => path,
                Some(path) => {
                    tracing::debug!(path = %path.display(), "no configuration file");
                    return Ok(Config::default());
                }
                None => return Ok(Config::default()),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Returns the Steam root to use: the command line wins over the file.
    pub fn steam_root(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.steam_dir.clone())
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamepath").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn reads_steam_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "steam_dir = \"/mnt/steam\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.steam_dir, Some(PathBuf::from("/mnt/steam")));
    }

    #[test]
    fn empty_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
    }

    #[test]
    fn invalid_toml_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "steam_dir = [").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn flag_overrides_file() {
        let config = Config {
            steam_dir: Some(PathBuf::from("/from/file")),
        };
        assert_eq!(
            config.steam_root(Some(PathBuf::from("/from/flag"))),
            Some(PathBuf::from("/from/flag"))
        );
        assert_eq!(config.steam_root(None), Some(PathBuf::from("/from/file")));
        assert_eq!(Config::default().steam_root(None), None);
    }
}
