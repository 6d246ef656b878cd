//! The launcher's control flow, without any of its UI.
//!
//! A front end asks [`Shell::startup`] which page to show first, then drives the remaining steps:
//! selecting a profile, configuring the library directory, listing games and launching one.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::{
    config::{Config, ConfigStore},
    data::{AccountProfile, GameEntry, LaunchOptions},
    error::{Result, SteamSimpleError},
    launcher::{ProcessLauncher, SystemProcessLauncher, launch_game, launch_steam},
    library::LibraryScanner,
    paths::{STEAM_PROCESS_NAME, SteamPaths},
    profiles::get_profiles,
};

const COMPONENT: &str = "Shell";

/// Where to go once a profile is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryRoute {
    /// No valid library directory is configured yet
    Setup,
    /// Show the games of this library directory
    Library(PathBuf),
}

/// The first page to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupRoute {
    /// The user has to pick one of these profiles
    SelectProfile(Vec<AccountProfile>),
    /// A profile is assumed to be active already
    Continue {
        profile: AccountProfile,
        next: LibraryRoute,
    },
}

#[derive(Debug)]
pub struct Shell<L: ProcessLauncher = SystemProcessLauncher> {
    paths: SteamPaths,
    config_store: ConfigStore,
    scanner: LibraryScanner,
    launcher: L,
}

impl Shell<SystemProcessLauncher> {
    pub fn new(paths: SteamPaths, config_store: ConfigStore) -> Self {
        Self::with_launcher(
            paths,
            config_store,
            LibraryScanner::default(),
            SystemProcessLauncher,
        )
    }
}

impl<L: ProcessLauncher> Shell<L> {
    pub fn with_launcher(
        paths: SteamPaths,
        config_store: ConfigStore,
        scanner: LibraryScanner,
        launcher: L,
    ) -> Self {
        Self {
            paths,
            config_store,
            scanner,
            launcher,
        }
    }

    pub fn paths(&self) -> &SteamPaths {
        &self.paths
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Profiles to choose from, sorted for display. Never empty.
    pub fn profiles(&self) -> Vec<AccountProfile> {
        get_profiles(&self.paths.login_users_vdf())
    }

    pub fn is_steam_running(&self) -> bool {
        self.launcher.is_running(STEAM_PROCESS_NAME)
    }

    /// Decides which page to show first.
    ///
    /// A running Steam client is taken to mean someone is logged in already, and the first
    /// profile is assumed to be theirs. This is a heuristic: the process says nothing about which
    /// profile is actually logged in.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn startup(&self) -> StartupRoute {
        let profiles = self.profiles();

        if !self.is_steam_running() {
            return StartupRoute::SelectProfile(profiles);
        }

        info!("{COMPONENT} - Steam is running, skipping profile selection");

        let profile = profiles
            .into_iter()
            .next()
            .unwrap_or_else(AccountProfile::synthetic_default);

        StartupRoute::Continue {
            profile,
            next: self.library_route(),
        }
    }

    /// Where to go once a profile is known. An unreadable config counts as no config.
    pub fn library_route(&self) -> LibraryRoute {
        let config = self.config_store.load().unwrap_or_else(|e| {
            error!("{COMPONENT} - Ignoring unreadable config: {e}");
            Config::default()
        });

        match config.library_dir() {
            Some(path_library) => LibraryRoute::Library(path_library),
            None => {
                debug!("{COMPONENT} - No valid library directory configured");
                LibraryRoute::Setup
            }
        }
    }

    /// Logs into Steam with the chosen profile, then decides where to go next.
    ///
    /// Failing to start Steam is logged but does not stop the user from reaching their library.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn select_profile(&self, profile: &AccountProfile) -> Result<LibraryRoute> {
        let Some(account_name) = profile.account_name.as_deref().filter(|a| !a.is_empty()) else {
            warn!("{COMPONENT} - Profile without an account name selected: {profile:?}");
            return Err(SteamSimpleError::Other(
                "Invalid profile configuration".to_owned(),
            ));
        };

        if let Err(e) = launch_steam(&self.launcher, &self.paths, account_name) {
            error!("{COMPONENT} - Error with launching Steam: {e}");
        }

        Ok(self.library_route())
    }

    /// Saves the library directory chosen by the user, returning it
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn configure_library(&self, input: &str) -> Result<PathBuf> {
        let config = Config::from_user_input(input)?;
        self.config_store.save(&config)?;

        config
            .library_dir()
            .ok_or_else(|| SteamSimpleError::InvalidDirectory(PathBuf::from(input.trim())))
    }

    pub fn games(&self, path_library: &Path) -> Vec<GameEntry> {
        self.scanner.scan(path_library)
    }

    pub fn launch_game(&self, game: &GameEntry, options: &LaunchOptions) -> Result<()> {
        launch_game(&self.launcher, game, options)
    }
}

/// Primary entry point into the crate: a [`Shell`] using the default Steam install and the
/// config file in the user's home directory
pub fn get_shell() -> Result<Shell> {
    Ok(Shell::new(
        SteamPaths::default(),
        ConfigStore::default_location()?,
    ))
}
