//! Core error types for dfc

use std::path::Path;
use thiserror::Error;

/// Main error type for dfc operations
#[derive(Error, Debug)]
pub enum DfcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Tool execution failed: {0}")]
    ToolExecution(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for dfc operations
pub type DfcResult<T> = Result<T, DfcError>;

impl DfcError {
    /// Parse error pinned to a line of an input file (1-based)
    pub fn parse_at(path: &Path, line: usize, message: impl std::fmt::Display) -> Self {
        DfcError::Parse(format!("{}:{}: {}", path.display(), line, message))
    }

    /// Map an IO error raised while opening `path`, keeping a missing file
    /// distinguishable from other IO failures
    pub fn from_open(err: std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            DfcError::NotFound(path.display().to_string())
        } else {
            DfcError::Io(err)
        }
    }
}

impl From<serde_json::Error> for DfcError {
    fn from(err: serde_json::Error) -> Self {
        DfcError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DfcError {
    fn from(err: toml::de::Error) -> Self {
        DfcError::Configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for DfcError {
    fn from(err: toml::ser::Error) -> Self {
        DfcError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for DfcError {
    fn from(err: anyhow::Error) -> Self {
        DfcError::Other(err.to_string())
    }
}
