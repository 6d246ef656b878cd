//! Reading of the local Steam logins saved in `loginusers.vdf`.
//!
//! The file nests one block per account under a `"users"` root:
//!
//! ```text
//! "users"
//! {
//!     "76561198000000000"
//!     {
//!         "AccountName"    "gaben"
//!         "PersonaName"    "Gabe"
//!         "MostRecent"     "1"
//!     }
//! }
//! ```
//!
//! Reading is a single forward pass over the lines. Anything unexpected is skipped, and an
//! unreadable file reads as containing no profiles.

use std::{fs::read, path::Path};

use itertools::Itertools;
use tracing::{debug, error, trace};

use crate::{
    data::AccountProfile,
    macros::logs::{debug_path, warn_no_profiles},
    parsers::{parse_quoted_tokens, parse_steam_id_line},
    utils::decode_utf8_ignoring_invalid,
};

const COMPONENT: &str = "Profile Reader";

const KEY_ACCOUNT_NAME: &str = "AccountName";
const KEY_PERSONA_NAME: &str = "PersonaName";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    /// Outside of any account block, key value lines are ignored
    Outside,
    /// Between an account's ID line and its closing brace
    InBlock,
}

/// Parses all account profiles from the contents of a `loginusers.vdf` file, in source order
pub fn parse_profiles(file_content: &str) -> Vec<AccountProfile> {
    let mut profiles = Vec::new();
    let mut current: Option<AccountProfile> = None;
    let mut state = ReaderState::Outside;

    for line in file_content.lines().map(str::trim) {
        if let Ok((_, steam_id)) = parse_steam_id_line(line) {
            if let Some(profile) = current.take() {
                profiles.push(profile);
            }

            trace!("{COMPONENT} - Found block for Steam ID {steam_id}");
            current = Some(AccountProfile {
                steam_id: Some(steam_id.to_owned()),
                ..Default::default()
            });
            state = ReaderState::InBlock;
        } else if state == ReaderState::InBlock && line.contains('"') {
            let Ok((_, tokens)) = parse_quoted_tokens(line) else {
                continue;
            };

            let (Some(profile), [key, value, ..]) = (current.as_mut(), tokens.as_slice()) else {
                continue;
            };

            match *key {
                KEY_ACCOUNT_NAME => profile.account_name = Some((*value).to_owned()),
                KEY_PERSONA_NAME => profile.persona_name = Some((*value).to_owned()),
                _ => {}
            }
        } else if line == "}" {
            state = ReaderState::Outside;
        }
    }

    profiles.extend(current);

    profiles
}

/// Reads all account profiles from the given `loginusers.vdf` file.
///
/// Never fails: a missing or unreadable file gives no profiles. Invalid UTF-8 is dropped.
#[tracing::instrument(level = "trace")]
pub fn read_profiles(path_login_users: &Path) -> Vec<AccountProfile> {
    debug_path!("loginusers.vdf file", path_login_users);

    let bytes = match read(path_login_users) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{COMPONENT} - Error with reading file at {path_login_users:?}:\n{e}");
            return Vec::new();
        }
    };

    let profiles = parse_profiles(&decode_utf8_ignoring_invalid(&bytes));

    if profiles.is_empty() {
        warn_no_profiles!(path_login_users);
    }

    debug!("{COMPONENT} - Profiles found: {}", profiles.len());

    profiles
}

/// Prepares parsed profiles for display: sorted case-insensitively by persona name, or a single
/// synthetic default profile when there are none.
pub fn resolve_profiles(profiles: Vec<AccountProfile>) -> Vec<AccountProfile> {
    if profiles.is_empty() {
        return vec![AccountProfile::synthetic_default()];
    }

    profiles
        .into_iter()
        .sorted_by_cached_key(|p| p.persona_name.as_deref().unwrap_or_default().to_lowercase())
        .collect()
}

/// Reads and resolves the profiles from the given `loginusers.vdf` file
pub fn get_profiles(path_login_users: &Path) -> Vec<AccountProfile> {
    resolve_profiles(read_profiles(path_login_users))
}
