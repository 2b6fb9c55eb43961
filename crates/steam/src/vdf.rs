//! Extraction of single quoted key/value pairs from text VDF and ACF files.
//!
//! Only the handful of keys gamepath needs are supported. Nesting, comments
//! and escapes are not interpreted; a value is everything between the
//! quote after the key and the last quote on that line.

use std::sync::LazyLock;

use regex::Regex;

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| key_pattern("path"));
static INSTALL_DIR_RE: LazyLock<Regex> = LazyLock::new(|| key_pattern("installdir"));
static PLATFORM_OVERRIDE_SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| key_pattern("platform_override_source"));

fn key_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#""{}"\s+"(.+)""#, regex::escape(key)))
        .expect("key pattern is a valid regex")
}

/// A key gamepath reads from Steam's text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Library root in `libraryfolders.vdf`.
    Path,
    /// Folder name under `common` in an app manifest.
    InstallDir,
    /// Platform the app was installed for, when overridden.
    PlatformOverrideSource,
}

impl Key {
    fn pattern(&self) -> &'static Regex {
        match self {
            Key::Path => &PATH_RE,
            Key::InstallDir => &INSTALL_DIR_RE,
            Key::PlatformOverrideSource => &PLATFORM_OVERRIDE_SOURCE_RE,
        }
    }
}

/// Returns every value for `key`, in text order.
pub fn extract_values(text: &str, key: Key) -> Vec<String> {
    key.pattern()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Returns the first value for `key`, or an empty string if it is absent.
pub fn extract_value(text: &str, key: Key) -> String {
    key.pattern()
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}
