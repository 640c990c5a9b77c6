use ggmax_core::{ConfigError, ConvertError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Settings file or format registry could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Selected game is not in the registry
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Conversion failed
    #[error("{0}")]
    Convert(#[from] ConvertError),
}

impl CliError {
    pub(crate) fn unknown_game(msg: impl Into<String>) -> Self {
        Self::UnknownGame(msg.into())
    }
}
