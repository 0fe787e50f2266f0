use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::log::{line_format::LineFormat, log_error::LogError, log_level::Level, log_sink::LogSink};

/// Append-only file sink.
///
/// The file is created if missing and never truncated. Every call appends a
/// single uncolored line with one `write_all` on an `O_APPEND` handle. The
/// handle is closed when the sink is dropped.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
    format: LineFormat,
    failed: AtomicBool,
}

impl FileSink {
    /// Opens (or creates) `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be created or opened for writing.
    pub fn open<P: AsRef<Path>>(path: P, format: LineFormat) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            file,
            path,
            format,
            failed: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn format(&self) -> &LineFormat {
        &self.format
    }
}

impl LogSink for FileSink {
    fn write_line(&self, level: Level, args: fmt::Arguments<'_>) {
        let line = self.format.render(level, args, false);
        if let Err(e) = (&self.file).write_all(line.as_bytes()) {
            // Report the first failure only, logging must keep going.
            if !self.failed.swap(true, Ordering::Relaxed) {
                let _ = writeln!(
                    io::stderr(),
                    "(tierlog) write to {} failed: {e}",
                    self.path.display()
                );
            }
        }
    }
}
