//! A Rust library backing a simple Steam-like games launcher.
//!
//! # Description
//!
//! This library does the work behind a launcher's pages, leaving only the drawing to the front
//! end. It can:
//!
//! - list the Steam accounts saved on this machine (from `loginusers.vdf`), and log into one
//! - find installed games in a library directory such as `steamapps/common`, along with the
//!   executable which starts each of them and whether an update is pending
//! - remember the library directory between runs
//! - start a game with extra launch options
//!
//! Only the default Windows layout of a Steam install is known about, but every path can be given
//! explicitly.
//!
//! # Usage
//!
//! ```rust,no_run
//! use steam_simple::{
//!     data::LaunchOptions,
//!     get_shell,
//!     shell::{LibraryRoute, StartupRoute},
//! };
//!
//! let shell = get_shell()?;
//!
//! let next = match shell.startup() {
//!     StartupRoute::SelectProfile(profiles) => shell.select_profile(&profiles[0])?,
//!     StartupRoute::Continue { next, .. } => next,
//! };
//!
//! let path_library = match next {
//!     LibraryRoute::Library(path) => path,
//!     LibraryRoute::Setup => shell.configure_library(r"D:\SteamLibrary\steamapps\common")?,
//! };
//!
//! for game in shell.games(&path_library) {
//!     println!("{} (update available: {})", game.name, game.update_available);
//! }
//! # Ok::<(), steam_simple::error::SteamSimpleError>(())
//! ```
//!
//! The building blocks can also be used on their own:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use steam_simple::{library::scan_library, profiles::parse_profiles};
//!
//! let profiles = parse_profiles("\"76561198000000000\"\n{\n\"AccountName\" \"gaben\"\n}\n");
//! let games = scan_library(Path::new(r"C:\Program Files (x86)\Steam\steamapps\common"));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod launcher;
pub mod library;
mod macros;
mod parsers;
pub mod paths;
pub mod profiles;
pub mod shell;
#[cfg(test)]
mod test_utils;
mod utils;

pub use shell::get_shell;
