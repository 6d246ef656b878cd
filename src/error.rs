//! Error types used by this crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Custom error type returned by the fallible parts of the crate (configuration, launching).
///
/// Profile reading and library scanning never return this: they degrade to empty results instead.
#[derive(Error, Debug)]
pub enum SteamSimpleError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error originating from [`serde_json::Error`]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error originating from [`nom::Err`]
    #[error(transparent)]
    Nom(#[from] nom::Err<nom::error::Error<String>>),

    /// An executable which should be started does not exist
    #[error("Executable not found at {0:?}")]
    ExecutableNotFound(PathBuf),

    /// A path given as a library directory is not a directory
    #[error("Not a valid directory: {0:?}")]
    InvalidDirectory(PathBuf),

    /// The current user has no home directory to store configuration in
    #[error("No valid home directory found for the current user")]
    NoHomeDir,

    /// Error originating from any other source
    #[error("Other error: {0}")]
    Other(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for SteamSimpleError {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::Nom(err.map_input(Into::into))
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SteamSimpleError>;
