use std::path::Path;

use thiserror::Error;

/// Errors loading the format registry or the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Settings {
        path: String,
        source: toml::de::Error,
    },
    /// A game entry declares no fields.
    #[error("Game '{game}' must declare at least one field")]
    EmptyFields { game: String },
    /// A game entry declares an empty separator.
    #[error("Game '{game}' has an empty separator")]
    EmptySeparator { game: String },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A raw line that does not carry enough fields for its game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line has {actual} fields, but {expected} are required: {line:?}")]
pub struct ParseError {
    /// The raw line as given (before trimming).
    pub line: String,
    pub expected: usize,
    pub actual: usize,
}

/// Errors resolving or rendering a message template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {path}")]
    NotFound { path: String },
    #[error("I/O error reading template {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// A placeholder names a field the line does not provide.
    #[error("Template references undefined field '{field}'")]
    UndefinedField { field: String },
}

impl TemplateError {
    pub fn undefined_field(field: impl Into<String>) -> Self {
        Self::UndefinedField {
            field: field.into(),
        }
    }

    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.display().to_string(),
            }
        } else {
            Self::Io {
                path: path.display().to_string(),
                source,
            }
        }
    }
}

/// Top-level error for conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The selected game is not in the loaded registry
    #[error("Game '{0}' not found in the format registry")]
    UnknownGame(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Reading the base file or writing the output file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn unknown_game(game: impl Into<String>) -> Self {
        Self::UnknownGame(game.into())
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
