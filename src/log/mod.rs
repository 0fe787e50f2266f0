pub mod console_sink;
pub mod file_sink;
pub mod gated_logger;
pub mod line_format;
pub mod log_bridge;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_setup;
pub mod log_sink;
pub mod logger;
pub mod memory_sink;
pub mod multi_logger;
pub use console_sink::{ConsoleSink, ConsoleTarget};
pub use file_sink::FileSink;
pub use gated_logger::{ConsoleLogger, FileLogger, GatedLogger};
pub use line_format::{ColorMode, LineFormat};
pub use log_bridge::LogBridge;
pub use log_error::LogError;
pub use log_level::Level;
pub use log_sink::LogSink;
pub use logger::{FATAL_EXIT_CODE, Logger, terminate};
pub use memory_sink::MemorySink;
pub use multi_logger::MultiLogger;
