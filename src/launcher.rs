//! Starting Steam and games, and checking which processes are running.

use std::{fmt::Debug, path::Path, process::Command};

use cfg_if::cfg_if;
use tracing::{debug, error, info};

use crate::{
    data::{GameEntry, LaunchOptions},
    error::{Result, SteamSimpleError},
    parsers::parse_launch_arguments,
    paths::{STEAM_PROCESS_NAME, SteamPaths},
    utils::get_launch_command,
};

const COMPONENT: &str = "Process Launcher";

/// Anything able to look up and start processes
pub trait ProcessLauncher: Debug {
    /// Whether a process with the given image name is running, ignoring case
    fn is_running(&self, process_name: &str) -> bool;

    /// Starts the given executable with a whitespace separated argument string, without waiting
    /// for it
    fn start(&self, path_executable: &Path, arguments: &str) -> Result<()>;
}

/// Whether a process listing contains the given process name as a whole word, ignoring case
pub fn listing_contains_process(listing: &str, process_name: &str) -> bool {
    listing
        .split_whitespace()
        .any(|word| word.eq_ignore_ascii_case(process_name))
}

cfg_if! {
    if #[cfg(windows)] {
        fn get_process_listing_command() -> Command {
            Command::new("tasklist")
        }
    } else {
        fn get_process_listing_command() -> Command {
            let mut command = Command::new("ps");
            command.args(["-A", "-o", "comm="]);
            command
        }
    }
}

/// Launches processes on the current system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessLauncher;

impl ProcessLauncher for SystemProcessLauncher {
    #[tracing::instrument(level = "trace")]
    fn is_running(&self, process_name: &str) -> bool {
        let output = match get_process_listing_command().output() {
            Ok(output) => output,
            Err(e) => {
                error!("{COMPONENT} - Error with listing running processes:\n{e}");
                return false;
            }
        };

        listing_contains_process(&String::from_utf8_lossy(&output.stdout), process_name)
    }

    #[tracing::instrument(level = "trace")]
    fn start(&self, path_executable: &Path, arguments: &str) -> Result<()> {
        let (_, args) = parse_launch_arguments(arguments)?;

        let mut command = get_launch_command(path_executable, args);
        debug!("{COMPONENT} - Starting: {command:?}");

        command.spawn().inspect_err(|e| {
            error!("{COMPONENT} - Error with starting {path_executable:?}:\n{e}")
        })?;

        Ok(())
    }
}

/// Starts Steam logged in as the given account, unless Steam is already running.
///
/// Returns whether Steam was started.
#[tracing::instrument(level = "trace")]
pub fn launch_steam(
    launcher: &dyn ProcessLauncher,
    paths: &SteamPaths,
    account_name: &str,
) -> Result<bool> {
    if launcher.is_running(STEAM_PROCESS_NAME) {
        info!("{COMPONENT} - Steam is already running");
        return Ok(false);
    }

    let path_steam = paths.steam_executable();
    if !path_steam.is_file() {
        error!("{COMPONENT} - Steam executable not found at {path_steam:?}");
        return Err(SteamSimpleError::ExecutableNotFound(path_steam));
    }

    // Account names never contain whitespace, so no quoting is needed
    launcher.start(&path_steam, &format!("-login {account_name}"))?;

    Ok(true)
}

/// Starts the given game with the given options
#[tracing::instrument(level = "trace")]
pub fn launch_game(
    launcher: &dyn ProcessLauncher,
    game: &GameEntry,
    options: &LaunchOptions,
) -> Result<()> {
    if !game.executable_path.exists() {
        error!(
            "{COMPONENT} - Executable for '{}' not found at {:?}",
            game.name, game.executable_path
        );
        return Err(SteamSimpleError::ExecutableNotFound(
            game.executable_path.clone(),
        ));
    }

    launcher.start(&game.executable_path, &options.to_argument_string())
}
