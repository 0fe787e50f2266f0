use std::{
    fmt,
    path::Path,
    sync::atomic::{AtomicU8, Ordering},
};

use crate::log::{
    console_sink::{ConsoleSink, ConsoleTarget},
    file_sink::FileSink,
    line_format::LineFormat,
    log_error::LogError,
    log_level::Level,
    log_sink::LogSink,
    logger::Logger,
};

/// Logger writing to the console.
pub type ConsoleLogger = GatedLogger<ConsoleSink>;
/// Logger appending to a file.
pub type FileLogger = GatedLogger<FileSink>;

/// Logger bound to exactly one sink, filtering calls by a threshold.
///
/// The threshold is an atomic, so [`set_level`](Self::set_level) works through
/// shared references. A call racing with `set_level` sees either the old or
/// the new threshold.
#[derive(Debug)]
pub struct GatedLogger<S: LogSink> {
    sink: S,
    threshold: AtomicU8,
}

impl<S: LogSink> GatedLogger<S> {
    #[must_use]
    pub fn new(sink: S, level: Level) -> Self {
        Self {
            sink,
            threshold: AtomicU8::new(level as u8),
        }
    }

    /// Replaces the threshold for all severity calls.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    #[must_use]
    pub fn level(&self) -> Level {
        // Only valid discriminants are ever stored.
        Level::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or(Level::NoLog)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the logger and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.level().enables(level) {
            self.sink.write_line(level, args);
        }
    }
}

impl ConsoleLogger {
    /// Console logger with everything enabled.
    #[must_use]
    pub fn console(target: ConsoleTarget, format: LineFormat) -> Self {
        Self::new(ConsoleSink::new(target, format), Level::Debug)
    }

    #[must_use]
    pub fn stdout(format: LineFormat) -> Self {
        Self::console(ConsoleTarget::Stdout, format)
    }

    #[must_use]
    pub fn stderr(format: LineFormat) -> Self {
        Self::console(ConsoleTarget::Stderr, format)
    }

    /// Stderr logger with the standard stamp at `level`.
    #[must_use]
    pub fn default_stderr(level: Level) -> Self {
        Self::new(
            ConsoleSink::new(ConsoleTarget::Stderr, LineFormat::standard()),
            level,
        )
    }

    /// Stdout logger with the standard stamp at `level`.
    #[must_use]
    pub fn default_stdout(level: Level) -> Self {
        Self::new(
            ConsoleSink::new(ConsoleTarget::Stdout, LineFormat::standard()),
            level,
        )
    }
}

impl FileLogger {
    /// File logger with everything enabled.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened for appending.
    pub fn file<P: AsRef<Path>>(path: P, format: LineFormat) -> Result<Self, LogError> {
        Ok(Self::new(FileSink::open(path, format)?, Level::Debug))
    }

    /// File logger with the standard stamp at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened for appending.
    pub fn default_file<P: AsRef<Path>>(path: P, level: Level) -> Result<Self, LogError> {
        Ok(Self::new(FileSink::open(path, LineFormat::standard())?, level))
    }
}

impl<S: LogSink> Logger for GatedLogger<S> {
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn fatal_no_exit(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Fatal, args);
    }
}
