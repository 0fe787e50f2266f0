use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced while building loggers.
///
/// Logging calls themselves never fail; only construction and configuration do.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),
    #[error("invalid line format flag: {0:?}")]
    InvalidFlag(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("a global logger is already installed")]
    AlreadyInstalled,
}
