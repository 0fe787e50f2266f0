use std::{
    fmt,
    io::{self, IsTerminal, Write},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::log::{
    line_format::{ColorMode, LineFormat},
    log_error::LogError,
    log_level::Level,
    log_sink::LogSink,
};

/// Standard stream a [`ConsoleSink`] writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

impl std::str::FromStr for ConsoleTarget {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(ConsoleTarget::Stdout),
            "stderr" => Ok(ConsoleTarget::Stderr),
            _ => Err(LogError::InvalidValue {
                key: "console".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

/// Sink writing to stdout or stderr.
///
/// Each line is rendered up front and handed to the locked stream in a single
/// `write_all`, so concurrent callers never interleave within a line.
#[derive(Debug)]
pub struct ConsoleSink {
    target: ConsoleTarget,
    format: LineFormat,
    color: bool,
    failed: AtomicBool,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(target: ConsoleTarget, format: LineFormat) -> Self {
        Self::with_color(target, format, ColorMode::Auto)
    }

    /// Resolves `mode` once against the target stream.
    #[must_use]
    pub fn with_color(target: ConsoleTarget, format: LineFormat, mode: ColorMode) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => match target {
                ConsoleTarget::Stdout => io::stdout().is_terminal(),
                ConsoleTarget::Stderr => io::stderr().is_terminal(),
            },
        };
        Self {
            target,
            format,
            color,
            failed: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.color
    }

    #[must_use]
    pub fn format(&self) -> &LineFormat {
        &self.format
    }
}

impl LogSink for ConsoleSink {
    fn write_line(&self, level: Level, args: fmt::Arguments<'_>) {
        let line = self.format.render(level, args, self.color);
        let res = match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        };
        // A broken stdout is reported once on stderr; a broken stderr has nowhere to go.
        if let Err(e) = res {
            if self.target == ConsoleTarget::Stdout && !self.failed.swap(true, Ordering::Relaxed) {
                let _ = writeln!(io::stderr(), "(tierlog) stdout write failed: {e}");
            }
        }
    }
}
