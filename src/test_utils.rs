use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use crate::{data::AccountProfile, error::Result, launcher::ProcessLauncher};

/// A `loginusers.vdf` with three accounts, not sorted by persona name
pub const LOGIN_USERS_VDF: &str = include_str!("../tests/fixtures/loginusers.vdf");

pub fn profile(
    steam_id: &str,
    account_name: Option<&str>,
    persona_name: Option<&str>,
) -> AccountProfile {
    AccountProfile {
        steam_id: Some(steam_id.to_owned()),
        account_name: account_name.map(str::to_owned),
        persona_name: persona_name.map(str::to_owned),
    }
}

/// Creates an empty file at the given path relative to `root`, including parent directories
pub fn touch(root: &Path, relative_path: &str) {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

/// Builds the following library under `root`:
///
/// - `Alpha/bin/game.exe`
/// - `Bravo/readme.txt` (no executable)
/// - `Charlie/run.EXE` and `Charlie/update.flag`
pub fn create_mock_library(root: &Path) {
    touch(root, "Alpha/bin/game.exe");
    touch(root, "Bravo/readme.txt");
    touch(root, "Bravo/data/level.dat");
    touch(root, "Charlie/run.EXE");
    touch(root, "Charlie/update.flag");
}

/// Records started processes instead of starting them
#[derive(Debug, Default)]
pub struct MockLauncher {
    running: Vec<String>,
    started: RefCell<Vec<(PathBuf, String)>>,
}

impl MockLauncher {
    pub fn with_running<'a>(running: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            running: running.into_iter().map(str::to_owned).collect(),
            ..Default::default()
        }
    }

    pub fn started(&self) -> Vec<(PathBuf, String)> {
        self.started.borrow().clone()
    }
}

impl ProcessLauncher for MockLauncher {
    fn is_running(&self, process_name: &str) -> bool {
        self.running
            .iter()
            .any(|r| r.eq_ignore_ascii_case(process_name))
    }

    fn start(&self, path_executable: &Path, arguments: &str) -> Result<()> {
        self.started
            .borrow_mut()
            .push((path_executable.to_path_buf(), arguments.to_owned()));
        Ok(())
    }
}
