//! Crate error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by configuration loading, export, and the terminal UI.
///
/// The simulation itself is infallible and never produces these.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("cannot read \"{path}\": {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("unknown preset \"{name}\", available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("{} invalid config field(s): {}", .0.len(), join_errors(.0))]
    Invalid(Vec<ConfigError>),

    #[error("cannot open log file \"{path}\": {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, DashError>;
