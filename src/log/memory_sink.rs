use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::log::{line_format::LineFormat, log_level::Level, log_sink::LogSink};

/// Sink that keeps rendered lines in memory.
///
/// Clones share the same buffer, so one handle can be given to a logger while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    format: LineFormat,
}

impl MemorySink {
    /// Buffer with [`LineFormat::bare`] lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(format: LineFormat) -> Self {
        Self {
            lines: Arc::default(),
            format,
        }
    }

    /// Snapshot of the recorded lines, without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// All recorded lines joined, newline terminated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lock().iter().map(|l| format!("{l}\n")).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic elsewhere while holding the lock must not silence logging.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, level: Level, args: fmt::Arguments<'_>) {
        let mut line = self.format.render(level, args, false);
        if line.ends_with('\n') {
            line.pop();
        }
        self.lock().push(line);
    }
}
