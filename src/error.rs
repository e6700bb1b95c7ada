use std::path::PathBuf;

/// Errors from parsing a coordinate token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("malformed coordinate '{0}': expected a letter followed by digits")]
    Format(String),

    #[error("coordinate '{token}' is outside the {dim}x{dim} board")]
    Range { token: String, dim: usize },
}

/// A board dimension outside the supported 4..=26 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("board dimension {0} is outside the supported range 4..=26")]
pub struct DimensionError(pub usize);

/// Errors that can occur when saving or loading a game record.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("expected {expected} tokens for a dimension-{dim} game, found {found}")]
    TokenCount {
        dim: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid side marker '{0}': expected 'F' or 'H'")]
    Side(String),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error("two pieces occupy {0}")]
    Duplicate(String),

    #[error("roster has {found} pieces but the {dim}x{dim} board requires {expected}")]
    RosterMismatch {
        dim: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to access save file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
