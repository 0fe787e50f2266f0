use std::fmt;

use crate::log::log_level::Level;

/// A destination that records one rendered line per call.
///
/// Implementations own their destination and decide its decoration (stamp,
/// tag, color). Writing never reports failure to the caller.
pub trait LogSink: Send + Sync {
    fn write_line(&self, level: Level, args: fmt::Arguments<'_>);
}
