use std::sync::Arc;
use std::{env, process};

use tierlog::config::Config;
use tierlog::log::log_setup;
use tierlog::log::{ConsoleLogger, FileLogger, Level, Logger, MultiLogger};
use tierlog::{logger_debug, logger_error, logger_fatal, logger_info, logger_warn};

const DEFAULT_LOG_FILE: &str = "tierlog-demo.log";

fn main() {
    // --- Parse CLI args ----------------------------------------------------
    //
    // Supported:
    //   cargo run --bin tierlog_demo
    //      -> stderr at DEBUG + tierlog-demo.log at DEBUG
    //
    //   cargo run --bin tierlog_demo -- app.conf
    //      -> loggers described by the [Logging] section of app.conf

    let args: Vec<String> = env::args().collect();

    let logger: Arc<dyn Logger> = match args.len() {
        1 => default_logger(),
        2 => match Config::load(&args[1]).and_then(|cfg| log_setup::from_config(&cfg)) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("[tierlog_demo] {e}");
                process::exit(2);
            }
        },
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}            # stderr + {DEFAULT_LOG_FILE}", args[0]);
            eprintln!("  {} [CONFIG]   # loggers from a config file", args[0]);
            process::exit(2);
        }
    };

    logger_debug!(logger, "This is a debug message");
    logger_info!(logger, "This is an info message");
    logger_warn!(logger, "This is a warning message");
    logger_error!(logger, "This is an error message");

    // Every sink records this line before the process exits with status 1.
    logger_fatal!(logger, "This is a fatal message");
}

fn default_logger() -> Arc<dyn Logger> {
    let console = ConsoleLogger::default_stderr(Level::Debug);
    match FileLogger::default_file(DEFAULT_LOG_FILE, Level::Debug) {
        Ok(file) => Arc::new(MultiLogger::new(vec![Arc::new(console), Arc::new(file)])),
        Err(e) => {
            console.warn(format_args!("file logging disabled: {e}"));
            Arc::new(console)
        }
    }
}
