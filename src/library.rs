//! Discovery of installed games inside a library directory such as `steamapps/common`.
//!
//! Every immediate subdirectory of the library is a candidate game. A game is kept only if an
//! executable can be found somewhere inside its folder.

use std::{
    cmp::Ordering,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::{
    data::GameEntry,
    macros::logs::{debug_path, warn_no_games},
    utils::{absolute_or_given, contains_ignore_case, ends_with_ignore_case},
};

const COMPONENT: &str = "Library Scanner";

pub const DEFAULT_EXECUTABLE_EXTENSION: &str = ".exe";
pub const DEFAULT_UPDATE_MARKER: &str = "update.flag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File name suffix identifying an executable, compared case-insensitively
    pub executable_extension: String,
    /// Name of the file which, directly inside a game's folder, flags a pending update
    pub update_marker: String,
    /// How deep to look for an executable, where 1 only checks the game folder itself
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            executable_extension: DEFAULT_EXECUTABLE_EXTENSION.to_owned(),
            update_marker: DEFAULT_UPDATE_MARKER.to_owned(),
            max_depth: None,
        }
    }
}

/// Directory entries of the same directory are visited files first, then by name
fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Symlinks are not followed while walking, but links to files still count as files
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

#[derive(Debug, Clone, Default)]
pub struct LibraryScanner {
    options: ScanOptions,
}

impl LibraryScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn is_executable_name(&self, file_name: &OsStr) -> bool {
        ends_with_ignore_case(
            &file_name.to_string_lossy(),
            &self.options.executable_extension,
        )
    }

    /// Finds the first executable within the given game folder.
    ///
    /// A directory's files are checked before descending into its subdirectories, and entries
    /// are visited in file name order, so the same tree always gives the same executable.
    #[tracing::instrument(level = "trace", skip(self))]
    fn find_executable(&self, path_game_dir: &Path) -> Option<PathBuf> {
        let mut walker = WalkDir::new(path_game_dir)
            .min_depth(1)
            .sort_by(files_first_by_name);

        if let Some(max_depth) = self.options.max_depth {
            walker = walker.max_depth(max_depth);
        }

        walker
            .into_iter()
            .filter_map(|res| {
                res.map_err(|e| {
                    trace!("{COMPONENT} - Skipped unreadable entry: {e}");
                })
                .ok()
            })
            .filter(is_file_like)
            .find(|entry| self.is_executable_name(entry.file_name()))
            .map(DirEntry::into_path)
    }

    /// Returns a [`GameEntry`] for the given game folder, if it contains an executable
    #[tracing::instrument(level = "trace", skip(self))]
    fn get_game(&self, path_game_dir: &Path) -> Option<GameEntry> {
        let name = path_game_dir.file_name()?.to_string_lossy().into_owned();

        let Some(executable_path) = self.find_executable(path_game_dir) else {
            trace!("{COMPONENT} - Skipped '{name}' as no executable exists for it");
            return None;
        };

        let update_available = path_game_dir.join(&self.options.update_marker).exists();

        trace!("{COMPONENT} - Executable found for '{name}': {executable_path:?}");
        trace!("{COMPONENT} - Update available for '{name}': {update_available}");

        Some(GameEntry {
            name,
            executable_path,
            update_available,
        })
    }

    /// Scans the given library directory for games, in folder name order.
    ///
    /// Never fails: a missing library gives no games, and folders without an executable are
    /// left out.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn scan(&self, path_library: &Path) -> Vec<GameEntry> {
        debug_path!("library directory", path_library);

        if !path_library.is_dir() {
            warn_no_games!(path_library);
            return Vec::new();
        }

        let path_library = absolute_or_given(path_library);

        let games: Vec<GameEntry> = WalkDir::new(&path_library)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|res| {
                res.map_err(|e| {
                    debug!("{COMPONENT} - Skipped unreadable entry: {e}");
                })
                .ok()
            })
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| self.get_game(entry.path()))
            .collect();

        if games.is_empty() {
            warn_no_games!(path_library);
        }

        debug!("{COMPONENT} - Games found: {}", games.len());

        games
    }
}

/// Scans the given library directory with the default [`ScanOptions`]
pub fn scan_library(path_library: &Path) -> Vec<GameEntry> {
    LibraryScanner::default().scan(path_library)
}

/// Games whose name contains the query, ignoring case. An empty query matches all games.
pub fn filter_games<'a>(games: &'a [GameEntry], query: &str) -> Vec<&'a GameEntry> {
    let query = query.trim();

    games
        .iter()
        .filter(|g| query.is_empty() || contains_ignore_case(&g.name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::test_utils::{create_mock_library, touch};

    #[test]
    fn test_scan_library() {
        let dir = tempfile::tempdir().unwrap();
        create_mock_library(dir.path());

        let games = scan_library(dir.path());

        assert_eq!(games.len(), 2);

        assert_eq!(games[0].name, "Alpha");
        assert!(games[0].executable_path.ends_with("Alpha/bin/game.exe"));
        assert!(!games[0].update_available);

        assert_eq!(games[1].name, "Charlie");
        assert!(games[1].executable_path.ends_with("Charlie/run.EXE"));
        assert!(games[1].update_available);

        assert!(games.iter().all(|g| g.executable_path.is_absolute()));
    }

    #[test]
    fn test_scan_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        create_mock_library(dir.path());
        touch(dir.path(), "Delta/a/b/c/deep.exe");

        let first = scan_library(dir.path());
        let second = scan_library(dir.path());

        assert_eq!(first, second);
        assert_eq!(
            first.iter().collect::<HashSet<_>>(),
            second.iter().collect::<HashSet<_>>()
        );
    }

    #[test_case("does/not/exist"; "missing")]
    #[test_case("file.txt"; "file")]
    fn test_scan_invalid_library(relative_path: &str) {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "file.txt");

        assert!(scan_library(&dir.path().join(relative_path)).is_empty());
    }

    #[test]
    fn test_loose_files_in_library_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "loose.exe");

        assert!(scan_library(dir.path()).is_empty());
    }

    #[test]
    fn test_files_checked_before_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Game/aaa/nested.exe");
        touch(dir.path(), "Game/zzz.exe");

        let games = scan_library(dir.path());

        assert_eq!(games.len(), 1);
        assert!(games[0].executable_path.ends_with("Game/zzz.exe"));
    }

    #[test]
    fn test_first_executable_by_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Game/launcher.exe");
        touch(dir.path(), "Game/crash_reporter.exe");

        let games = scan_library(dir.path());

        assert!(games[0].executable_path.ends_with("Game/crash_reporter.exe"));
    }

    #[test]
    fn test_update_marker_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Game/game.exe");
        touch(dir.path(), "Game/sub/update.flag");

        assert!(!scan_library(dir.path())[0].update_available);
    }

    #[test]
    fn test_max_depth() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Shallow/game.exe");
        touch(dir.path(), "Deep/bin/x64/game.exe");

        let scanner = LibraryScanner::new(ScanOptions {
            max_depth: Some(2),
            ..Default::default()
        });
        let games = scanner.scan(dir.path());

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "Shallow");
    }

    #[test]
    fn test_custom_options() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Game/start.sh");
        touch(dir.path(), "Game/NEEDS_UPDATE");

        let scanner = LibraryScanner::new(ScanOptions {
            executable_extension: ".SH".into(),
            update_marker: "NEEDS_UPDATE".into(),
            max_depth: None,
        });
        let games = scanner.scan(dir.path());

        assert_eq!(games.len(), 1);
        assert!(games[0].update_available);
    }

    #[test_case("", 3)]
    #[test_case("   ", 3)]
    #[test_case("half", 2)]
    #[test_case("LIFE 2", 1)]
    #[test_case(" portal ", 1)]
    #[test_case("doom", 0)]
    fn test_filter_games(query: &str, expected: usize) {
        let games: Vec<GameEntry> = ["Half-Life", "Half-Life 2", "Portal"]
            .into_iter()
            .map(|name| GameEntry {
                name: name.to_owned(),
                executable_path: PathBuf::from(name).join("game.exe"),
                update_available: false,
            })
            .collect();

        assert_eq!(filter_games(&games, query).len(), expected);
    }
}
