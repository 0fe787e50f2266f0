//! Rendering of one log line: prefix, timestamp, level tag and message.
//!
//! The layout follows the classic `prefix YYYY/MM/DD HH:MM:SS [TAG] message`
//! convention. Every flag can be toggled through [`LineFormat`].

use std::fmt::{self, Write as _};

use chrono::{Local, NaiveDateTime, Utc};

use crate::log::{log_error::LogError, log_level::Level};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";

/// Whether console output carries ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when the stream is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "true" => Ok(ColorMode::Always),
            "never" | "off" | "false" => Ok(ColorMode::Never),
            _ => Err(LogError::InvalidValue {
                key: "color".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

/// Prefix options applied to every rendered line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LineFormat {
    /// Text placed at the start of the line, or before the tag with `msg_prefix`.
    pub prefix: String,
    /// Local date `YYYY/MM/DD`.
    pub date: bool,
    /// Local time `HH:MM:SS`.
    pub time: bool,
    /// Microsecond resolution for the time. Implies `time`.
    pub micros: bool,
    /// Use UTC instead of the local time zone.
    pub utc: bool,
    /// Move the prefix from the beginning of the line to just before the tag.
    pub msg_prefix: bool,
}

impl LineFormat {
    /// Date and time stamp, no prefix.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            date: true,
            time: true,
            ..Self::default()
        }
    }

    /// No stamp and no prefix: only `[TAG] message`.
    #[must_use]
    pub fn bare() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Parses a comma separated flag list such as `"date,time,utc"`.
    ///
    /// Recognised flags: `date`, `time`, `micros`, `utc`, `msgprefix`, and
    /// `std` as shorthand for `date,time`. An empty string yields no stamp.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidFlag`] for any other entry.
    pub fn from_flags(flags: &str) -> Result<Self, LogError> {
        let mut format = Self::bare();
        for flag in flags.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match flag.to_ascii_lowercase().as_str() {
                "date" => format.date = true,
                "time" => format.time = true,
                "micros" | "microseconds" => format.micros = true,
                "utc" => format.utc = true,
                "msgprefix" => format.msg_prefix = true,
                "std" | "standard" => {
                    format.date = true;
                    format.time = true;
                }
                _ => return Err(LogError::InvalidFlag(flag.to_owned())),
            }
        }
        Ok(format)
    }

    /// Renders a full line, newline terminated, stamped with the current time.
    #[must_use]
    pub fn render(&self, level: Level, args: fmt::Arguments<'_>, color: bool) -> String {
        let now = if self.utc {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        };
        self.render_at(now, level, args, color)
    }

    /// Same as [`render`](Self::render) with an explicit timestamp.
    #[must_use]
    pub fn render_at(
        &self,
        now: NaiveDateTime,
        level: Level,
        args: fmt::Arguments<'_>,
        color: bool,
    ) -> String {
        let mut line = String::with_capacity(64);
        if !self.msg_prefix {
            line.push_str(&self.prefix);
        }
        if self.date {
            let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
        }
        if self.time || self.micros {
            let _ = write!(line, "{}", now.format("%H:%M:%S"));
            if self.micros {
                let _ = write!(line, "{}", now.format("%.6f"));
            }
            line.push(' ');
        }
        if self.msg_prefix {
            line.push_str(&self.prefix);
        }
        push_tagged(&mut line, level, args, color);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

fn tag_color(level: Level) -> &'static str {
    match level {
        Level::Debug => BLUE,
        Level::Info => GREEN,
        Level::Warn => YELLOW,
        Level::Error | Level::Fatal | Level::NoLog => RED,
    }
}

// Fatal lines are red from the tag through the end of the message.
fn push_tagged(line: &mut String, level: Level, args: fmt::Arguments<'_>, color: bool) {
    if !color {
        let _ = write!(line, "[{}] {}", level.as_str(), args);
    } else if level == Level::Fatal {
        let _ = write!(line, "{RED}[{}] {}", level.as_str(), args);
        if line.ends_with('\n') {
            line.pop();
        }
        line.push_str(RESET);
    } else {
        let _ = write!(line, "[{}{}{RESET}] {}", tag_color(level), level.as_str(), args);
    }
}
