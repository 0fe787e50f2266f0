use log::{LevelFilter, Metadata, Record};

use crate::log::{log_error::LogError, logger::Logger};

/// Routes records from the `log` crate facade into a [`Logger`].
///
/// Gating stays with the wrapped logger, so the bridge accepts every record.
/// `trace` records are delivered as debug.
#[derive(Debug)]
pub struct LogBridge<L: Logger> {
    inner: L,
}

impl<L: Logger + 'static> LogBridge<L> {
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Installs the bridge as the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::AlreadyInstalled`] if a backend was set before.
    pub fn install(self) -> Result<(), LogError> {
        log::set_boxed_logger(Box::new(self)).map_err(|_| LogError::AlreadyInstalled)?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl<L: Logger> log::Log for LogBridge<L> {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let args = *record.args();
        match record.level() {
            log::Level::Trace | log::Level::Debug => self.inner.debug(args),
            log::Level::Info => self.inner.info(args),
            log::Level::Warn => self.inner.warn(args),
            log::Level::Error => self.inner.error(args),
        }
    }

    fn flush(&self) {}
}
