use std::path::{Path, PathBuf};

/// Steam install root of a default installation
pub const DEFAULT_STEAM_ROOT: &str = r"C:\Program Files (x86)\Steam";

/// Image name of the Steam client, as listed among running processes
pub const STEAM_PROCESS_NAME: &str = "Steam.exe";

/// Well-known locations inside a Steam installation.
///
/// Only the Windows layout is supported, but the root is always explicit so other installs (or
/// test fixtures) can be pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamPaths {
    path_root: PathBuf,
}

impl Default for SteamPaths {
    fn default() -> Self {
        Self::new(DEFAULT_STEAM_ROOT)
    }
}

impl SteamPaths {
    pub fn new(path_root: impl Into<PathBuf>) -> Self {
        Self {
            path_root: path_root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.path_root
    }

    /// Saved logins, read for profile selection
    pub fn login_users_vdf(&self) -> PathBuf {
        self.path_root.join("config").join("loginusers.vdf")
    }

    pub fn steam_executable(&self) -> PathBuf {
        self.path_root.join(STEAM_PROCESS_NAME)
    }

    /// Library directory suggested to the user before one is configured
    pub fn default_library_dir(&self) -> PathBuf {
        self.path_root.join("steamapps").join("common")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steam_paths() {
        let paths = SteamPaths::new("/opt/steam");

        assert_eq!(paths.root(), Path::new("/opt/steam"));
        assert!(paths.login_users_vdf().ends_with("config/loginusers.vdf"));
        assert!(paths.steam_executable().ends_with("Steam.exe"));
        assert!(paths.default_library_dir().ends_with("steamapps/common"));
    }

    #[test]
    fn test_default_root() {
        assert_eq!(SteamPaths::default().root(), Path::new(DEFAULT_STEAM_ROOT));
    }
}
