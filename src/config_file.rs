//! Configuration file support
//!
//! Loads analyser configuration from sectioned TOML files:
//!
//! ```toml
//! [input]
//! document_path = "manifest.mpd"
//!
//! [output]
//! path = "mpd_capabilities.txt"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::mpd::MpdNamespace;

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Input settings
    pub input: InputSettings,
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// MPD manifest to analyse
    pub document_path: PathBuf,
    /// Namespace prefix (defaults to "dash")
    pub namespace_prefix: Option<String>,
    /// Namespace URI (defaults to the MPEG-DASH 2011 schema)
    pub namespace_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Report file to write
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| AnalyzerError::io(path, e))?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let defaults = AnalyzerConfig::default();
        Self {
            input: InputSettings {
                document_path: defaults.document_path,
                namespace_prefix: Some(defaults.namespace.prefix),
                namespace_uri: Some(defaults.namespace.uri),
            },
            output: OutputSettings {
                path: defaults.output_path,
            },
            logging: Some(LoggingSettings {
                level: defaults.log_level,
                format: Some(defaults.log_format),
            }),
        }
    }

    /// Convert to AnalyzerConfig
    pub fn into_analyzer_config(self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();

        let namespace = MpdNamespace {
            prefix: self
                .input
                .namespace_prefix
                .unwrap_or(defaults.namespace.prefix),
            uri: self.input.namespace_uri.unwrap_or(defaults.namespace.uri),
        };
        if namespace.uri.is_empty() {
            return Err(AnalyzerError::Config(
                "input.namespace_uri must not be empty".to_string(),
            ));
        }

        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(defaults.log_format)),
            None => (defaults.log_level, defaults.log_format),
        };

        Ok(AnalyzerConfig {
            document_path: self.input.document_path,
            output_path: self.output.path,
            namespace,
            log_level,
            log_format,
        })
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
