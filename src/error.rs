use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems loading or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Errors surfaced by the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
