//! Analyser configuration

use std::path::PathBuf;

use crate::mpd::MpdNamespace;

/// Analyser configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// MPD manifest to analyse
    pub document_path: PathBuf,

    /// Report file to write
    pub output_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Namespace binding for qualified element lookups
    pub namespace: MpdNamespace,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from("manifest.mpd"),
            output_path: PathBuf::from("mpd_capabilities.txt"),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            namespace: MpdNamespace::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Configuration for one manifest/report pair, defaults elsewhere
    pub fn new(document_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
