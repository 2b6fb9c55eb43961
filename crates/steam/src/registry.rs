use std::path::PathBuf;

/// Steam's vendor key in the 32-bit view of the 64-bit registry.
#[cfg(target_os = "windows")]
const STEAM_SUBKEY: &str = r"SOFTWARE\WOW6432Node\Valve\Steam";

#[cfg(target_os = "windows")]
const INSTALL_PATH_VALUE: &str = "InstallPath";

/// Reads Steam's `InstallPath` from `HKEY_LOCAL_MACHINE`.
#[cfg(target_os = "windows")]
pub(crate) fn read_install_path() -> Option<PathBuf> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = match hklm.open_subkey(STEAM_SUBKEY) {
        Ok(key) => key,
        Err(e) => {
            tracing::debug!(subkey = STEAM_SUBKEY, error = %e, "steam registry key missing");
            return None;
        }
    };
    match key.get_value::<String, _>(INSTALL_PATH_VALUE) {
        Ok(path) => Some(PathBuf::from(path)),
        Err(e) => {
            tracing::debug!(value = INSTALL_PATH_VALUE, error = %e, "steam install path missing");
            None
        }
    }
}

#[cfg(not(target_os = "windows"))]
pub(crate) fn read_install_path() -> Option<PathBuf> {
    None
}
