//! Leveled logging macros over any [`Logger`](crate::log::logger::Logger).
//!
//! # Feature Flags
//! Lower levels can be removed at compile time with cargo features:
//! `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`, removing
//! all formatting overhead. `logger_fatal!` is never compiled out because the
//! process must exit whatever the configuration.

// ============================================================================
// 1. GENERIC INTERNAL MACRO
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $method:ident, $($arg:tt)*) => {{
        $crate::log::logger::Logger::$method(&$logger, format_args!($($arg)*))
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, fatal, $($arg)*) } }

#[macro_export]
macro_rules! logger_fatal_no_exit { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, fatal_no_exit, $($arg)*) } }

#[cfg(all(test, feature = "log-debug"))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use crate::log::{gated_logger::GatedLogger, log_level::Level, memory_sink::MemorySink};
    use std::sync::Arc;

    #[test]
    fn macros_format_and_gate() {
        let logger = GatedLogger::new(MemorySink::new(), Level::Info);
        let n = 7;
        crate::logger_debug!(logger, "hidden {n}");
        crate::logger_info!(logger, "count={}", n);
        crate::logger_warn!(logger, "careful");
        crate::logger_error!(logger, "failed: {}", "disk");
        crate::logger_fatal_no_exit!(logger, "last words");

        assert_eq!(
            logger.sink().lines(),
            vec![
                "[INFO] count=7",
                "[WARN] careful",
                "[ERROR] failed: disk",
                "[FATAL] last words"
            ]
        );
    }

    #[test]
    fn macros_accept_trait_objects() {
        let sink = MemorySink::new();
        let logger: Arc<dyn crate::log::logger::Logger> =
            Arc::new(GatedLogger::new(sink.clone(), Level::Debug));
        crate::logger_debug!(logger, "via arc");
        assert_eq!(sink.lines(), vec!["[DEBUG] via arc"]);
    }
}
