use std::{fmt, str::FromStr};

use crate::log::log_error::LogError;

/// Defines the severity levels for log messages, ordered from least to most severe.
///
/// The last variant, [`Level::NoLog`], is not a message severity. It is only
/// meaningful as a threshold and suppresses every line; a fatal call still
/// terminates the process under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Designates fine-grained informational events that are most useful to debug an application.
    #[default]
    Debug = 0,
    /// Designates informational messages that highlight the progress of the application.
    Info = 1,
    /// Designates potentially harmful situations.
    Warn = 2,
    /// Designates error events that might still allow the application to continue running.
    Error = 3,
    /// Designates errors after which the process terminates.
    Fatal = 4,
    /// Threshold that disables all output.
    NoLog = 5,
}

impl Level {
    /// All levels in increasing severity.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::NoLog,
    ];

    /// Upper-case tag used in rendered lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::NoLog => "NOLOG",
        }
    }

    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Debug),
            1 => Some(Level::Info),
            2 => Some(Level::Warn),
            3 => Some(Level::Error),
            4 => Some(Level::Fatal),
            5 => Some(Level::NoLog),
            _ => None,
        }
    }

    /// Returns `true` when a logger whose threshold is `self` should emit a
    /// message at `message`.
    ///
    /// `NoLog` as a message level is never emitted.
    #[must_use]
    pub fn enables(self, message: Level) -> bool {
        message != Level::NoLog && self <= message
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Level::from_u8(n).ok_or_else(|| LogError::InvalidLevel(s.to_owned()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" | "err" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "nolog" | "none" | "off" => Ok(Level::NoLog),
            _ => Err(LogError::InvalidLevel(s.to_owned())),
        }
    }
}
