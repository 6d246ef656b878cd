//! Persistence of the launcher's settings, a small JSON file in the user's home directory.

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
    error::{Result, SteamSimpleError},
    macros::logs::debug_path,
    utils::some_if_dir,
};

const COMPONENT: &str = "Configuration Store";

pub const CONFIG_FILE_NAME: &str = ".steam_simple_config.json";

/// Settings saved between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Library directory to scan for games, usually `steamapps/common`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_apps_path: Option<String>,
}

impl Config {
    /// Builds a config from a directory typed or picked by the user, which must exist
    pub fn from_user_input(input: &str) -> Result<Self> {
        let path = PathBuf::from(input.trim());

        if !path.is_dir() {
            return Err(SteamSimpleError::InvalidDirectory(path));
        }

        Ok(Self {
            steam_apps_path: Some(path.to_string_lossy().into_owned()),
        })
    }

    /// The configured library directory, if it is still a directory
    pub fn library_dir(&self) -> Option<PathBuf> {
        self.steam_apps_path
            .as_deref()
            .and_then(|p| some_if_dir(PathBuf::from(p)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path_config: PathBuf,
}

impl ConfigStore {
    pub fn new(path_config: impl Into<PathBuf>) -> Self {
        Self {
            path_config: path_config.into(),
        }
    }

    /// Store at `~/.steam_simple_config.json`
    pub fn default_location() -> Result<Self> {
        let path_home = dirs::home_dir().ok_or(SteamSimpleError::NoHomeDir)?;

        Ok(Self::new(path_home.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path_config
    }

    /// Loads the saved config. A config which was never saved loads as the default config.
    #[tracing::instrument(level = "trace")]
    pub fn load(&self) -> Result<Config> {
        let path_config = &self.path_config;
        debug_path!("config file", path_config);

        if !path_config.exists() {
            return Ok(Config::default());
        }

        let file_content = read_to_string(path_config).inspect_err(|e| {
            error!("{COMPONENT} - Error with reading config file at {path_config:?}:\n{e}")
        })?;

        let config: Config = serde_json::from_str(&file_content).inspect_err(|e| {
            error!("{COMPONENT} - Error with parsing config file at {path_config:?}:\n{e}")
        })?;

        debug!("{COMPONENT} - Loaded config: {config:?}");

        Ok(config)
    }

    /// Saves the config, replacing anything saved before
    #[tracing::instrument(level = "trace")]
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path_config.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        write(&self.path_config, serde_json::to_string(config)?).inspect_err(|e| {
            error!(
                "{COMPONENT} - Error with writing config file at {:?}:\n{e}",
                self.path_config
            )
        })?;

        debug!("{COMPONENT} - Saved config to {:?}", self.path_config);

        Ok(())
    }
}
