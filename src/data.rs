use std::path::PathBuf;

use itertools::Itertools;
use serde::Serialize;

/// Account and persona name used for the profile substituted when no profiles could be read
pub const DEFAULT_PROFILE_NAME: &str = "Default";

/// Shown in place of a missing persona name
pub const UNKNOWN_PERSONA_NAME: &str = "Unknown";

/// Shown in place of a missing account name
pub const UNKNOWN_ACCOUNT_NAME: &str = "N/A";

/// A local Steam login, as saved in `loginusers.vdf`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountProfile {
    pub steam_id: Option<String>,
    pub account_name: Option<String>,
    pub persona_name: Option<String>,
}

impl AccountProfile {
    /// The profile used when no profiles could be found
    pub fn synthetic_default() -> Self {
        Self {
            steam_id: None,
            account_name: Some(DEFAULT_PROFILE_NAME.to_owned()),
            persona_name: Some(DEFAULT_PROFILE_NAME.to_owned()),
        }
    }

    pub fn is_synthetic_default(&self) -> bool {
        *self == Self::synthetic_default()
    }

    /// Only profiles with an account name can be logged into
    pub fn is_selectable(&self) -> bool {
        self.account_name.as_deref().is_some_and(|a| !a.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.persona_name.as_deref().unwrap_or(UNKNOWN_PERSONA_NAME)
    }

    pub fn account_label(&self) -> &str {
        self.account_name.as_deref().unwrap_or(UNKNOWN_ACCOUNT_NAME)
    }
}

/// A game found in the library directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameEntry {
    /// Name of the game's folder, as is
    pub name: String,
    pub executable_path: PathBuf,
    pub update_available: bool,
}

/// Options chosen by the user before starting a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Free-form parameters, passed before the flags below
    pub extra: String,
    pub no_overlay: bool,
    pub windowed: bool,
    pub high_performance: bool,
    pub low_graphics: bool,
}

impl LaunchOptions {
    /// Renders the options to the argument string handed to the game's executable
    pub fn to_argument_string(&self) -> String {
        let flags = [
            (self.no_overlay, "-nooverlay"),
            (self.windowed, "-windowed"),
            (self.high_performance, "-high"),
            (self.low_graphics, "-lowgfx"),
        ];

        std::iter::once(self.extra.trim())
            .chain(flags.into_iter().filter(|(on, _)| *on).map(|(_, f)| f))
            .filter(|a| !a.is_empty())
            .join(" ")
    }
}
