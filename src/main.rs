//! MPD Analyser
//!
//! Reads an MPEG-DASH manifest and writes a capability report: general
//! presentation attributes, video/audio/subtitle tracks, DRM protection and
//! the period timeline.
//!
//! Usage: `mpd-analyser [config.toml]` or `mpd-analyser init [config.toml]`

#![allow(dead_code)]

mod analyzer;
mod config;
mod config_file;
mod duration;
mod error;
mod extract;
mod mpd;
mod report;
mod timeline;

#[cfg(test)]
mod integration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AnalyzerConfig;
use crate::config_file::{generate_default_config, ConfigFile};
use crate::error::Result;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "mpd-analyser";

/// Config file used when none is given
const DEFAULT_CONFIG_PATH: &str = "mpd-analyser.toml";

/// What the command line asks for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Write a default config file to the given path
    Init(String),
    /// Analyse using the config file at the given path
    Analyze(String),
}

/// Parse the arguments following the program name
///
/// A config file literally named `init` must be given with a path
/// component (`./init`).
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Command {
    let mut args = args.into_iter();
    match args.next() {
        Some(first) if first == "init" => Command::Init(
            args.next()
                .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
        ),
        Some(path) => Command::Analyze(path),
        None => Command::Analyze(DEFAULT_CONFIG_PATH.to_string()),
    }
}

fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args().skip(1)) {
        Command::Init(path) => {
            generate_default_config(&path)?;
            println!("Default configuration written to {}", path);
            return Ok(());
        }
        Command::Analyze(path) => path,
    };

    let (config, load_error) = load_config(&config_path);

    init_logging(&config);
    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        );
    }
    tracing::info!("Configuration loaded: {:?}", config);

    analyzer::run(&config)?;
    println!("Report written to {}", config.output_path.display());

    Ok(())
}

/// Load configuration, falling back to defaults
///
/// A missing file silently yields defaults; an unreadable or invalid one
/// yields defaults plus the error so it can be logged once logging is up.
fn load_config(path: &str) -> (AnalyzerConfig, Option<error::AnalyzerError>) {
    if !std::path::Path::new(path).exists() {
        return (AnalyzerConfig::default(), None);
    }
    match ConfigFile::from_file(path).and_then(ConfigFile::into_analyzer_config) {
        Ok(config) => (config, None),
        Err(e) => (AnalyzerConfig::default(), Some(e)),
    }
}

/// Initialize logging with tracing
fn init_logging(config: &AnalyzerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mpd_analyser={}", config.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
