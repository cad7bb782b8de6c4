use std::fmt;

use gridset_engine::GridError;

#[derive(Debug)]
pub enum ConfigError {
    /// TOML / JSON parse or deserialization error.
    Parse(String),
    /// File extension is neither `.toml` nor `.json`.
    UnsupportedFormat(String),
    /// IO error (file read, etc.).
    Io(String),
    /// The grid plugin rejected the loaded theme.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "theme parse error: {msg}"),
            Self::UnsupportedFormat(path) => {
                write!(f, "unsupported theme format: {path} (expected .toml or .json)")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Grid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
