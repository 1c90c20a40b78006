use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the MPD analyser
///
/// Only document loading and configuration can fail. Malformed durations and
/// missing attributes inside a well-formed MPD are recovered where they are
/// read and never reach this type.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl AnalyzerError {
    /// Attach the offending path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AnalyzerError>;
