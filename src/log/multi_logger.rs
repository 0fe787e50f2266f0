use std::{fmt, sync::Arc};

use crate::log::logger::Logger;

/// Fans every call out to an ordered list of child loggers.
///
/// The composite has no threshold; each child applies its own. Children are
/// shared, not owned: the same child may sit in several composites, and
/// dropping the composite leaves the children usable. A composite is itself a
/// [`Logger`], so composites nest.
///
/// [`fatal`](Logger::fatal) first runs [`fatal_no_exit`](Logger::fatal_no_exit)
/// on every child in order, then exits once.
#[derive(Clone, Default)]
pub struct MultiLogger {
    loggers: Vec<Arc<dyn Logger>>,
}

impl MultiLogger {
    #[must_use]
    pub fn new(loggers: Vec<Arc<dyn Logger>>) -> Self {
        Self { loggers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl FromIterator<Arc<dyn Logger>> for MultiLogger {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Logger>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for MultiLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLogger")
            .field("loggers", &self.loggers.len())
            .finish()
    }
}

impl Logger for MultiLogger {
    fn debug(&self, args: fmt::Arguments<'_>) {
        for l in &self.loggers {
            l.debug(args);
        }
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        for l in &self.loggers {
            l.info(args);
        }
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        for l in &self.loggers {
            l.warn(args);
        }
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        for l in &self.loggers {
            l.error(args);
        }
    }

    // Never the children's `fatal`: that would exit after the first one.
    fn fatal_no_exit(&self, args: fmt::Arguments<'_>) {
        for l in &self.loggers {
            l.fatal_no_exit(args);
        }
    }
}
