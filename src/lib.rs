//! tierlog is a small leveled logging facade.
//!
//! Messages are tagged with one of five severities and routed to sinks
//! (console, file, memory) only when they reach the configured threshold.
//! Several loggers can be composed into one so a single call fans out to all
//! of them.
//!
//! Fatal calls follow a two-phase protocol: every composed sink records the
//! fatal line first, then the process exits exactly once with status 1.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tierlog::log::{ConsoleLogger, FileLogger, Level, Logger, MultiLogger};
//!
//! let console = ConsoleLogger::default_stderr(Level::Debug);
//! let file = FileLogger::default_file("app.log", Level::Error)?;
//! let logger = MultiLogger::new(vec![Arc::new(console), Arc::new(file)]);
//!
//! tierlog::logger_info!(logger, "started with {} workers", 4);
//! logger.error(format_args!("disk almost full"));
//! # Ok::<(), tierlog::log::LogError>(())
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Levels, sinks, gated and composite loggers.
pub mod log;
