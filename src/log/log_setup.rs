//! Builds a logger tree from the `[Logging]` section of a [`Config`].
//!
//! ```text
//! [Logging]
//! level = info          # console threshold
//! console = stderr      # stderr | stdout | none
//! color = auto          # auto | always | never
//! file = ~/logs/app.log # optional
//! file_level = error    # defaults to `level`
//! prefix = app:
//! flags = date,time     # see LineFormat::from_flags
//! ```

use std::{path::PathBuf, sync::Arc};

use crate::{
    config::Config,
    log::{
        console_sink::{ConsoleSink, ConsoleTarget},
        file_sink::FileSink,
        gated_logger::{ConsoleLogger, FileLogger, GatedLogger},
        line_format::{ColorMode, LineFormat},
        log_error::LogError,
        log_level::Level,
        logger::Logger,
        multi_logger::MultiLogger,
    },
};

pub const SECTION: &str = "Logging";

/// Loggers built from a config, with handles to the gated sinks.
///
/// `logger` is what callers log through. `console` and `file` are the same
/// gated loggers it dispatches to, kept so thresholds can be changed later.
#[derive(Clone)]
pub struct LogSetup {
    pub logger: Arc<dyn Logger>,
    pub console: Option<Arc<ConsoleLogger>>,
    pub file: Option<Arc<FileLogger>>,
}

impl LogSetup {
    /// Applies `level` to every configured sink.
    pub fn set_level(&self, level: Level) {
        if let Some(console) = &self.console {
            console.set_level(level);
        }
        if let Some(file) = &self.file {
            file.set_level(level);
        }
    }
}

/// Creates the loggers described by `config`.
///
/// One configured sink yields that gated logger directly; two yield a
/// [`MultiLogger`] with the console first. With neither, the result is an
/// empty composite that discards everything but still exits on fatal.
///
/// # Errors
///
/// Returns a [`LogError`] for unparsable values or an unopenable file.
pub fn build(config: &Config) -> Result<LogSetup, LogError> {
    let level: Level = config.get_or_default(SECTION, "level", "info").parse()?;
    let flags = config.get_or_default(SECTION, "flags", "date,time");
    let mut format = LineFormat::from_flags(flags)?;
    format.prefix = config.get_or_default(SECTION, "prefix", "").to_owned();

    let console = match config
        .get_non_empty_or_default(SECTION, "console", "stderr")
        .to_ascii_lowercase()
        .as_str()
    {
        "none" => None,
        target => {
            let target: ConsoleTarget = target.parse()?;
            let color: ColorMode = config
                .get_non_empty_or_default(SECTION, "color", "auto")
                .parse()?;
            let sink = ConsoleSink::with_color(target, format.clone(), color);
            Some(Arc::new(GatedLogger::new(sink, level)))
        }
    };

    let file = match config.get_non_empty(SECTION, "file") {
        Some(path) => {
            let file_level = match config.get_non_empty(SECTION, "file_level") {
                Some(l) => l.parse()?,
                None => level,
            };
            let sink = FileSink::open(expand_path(path), format)?;
            Some(Arc::new(GatedLogger::new(sink, file_level)))
        }
        None => None,
    };

    let logger: Arc<dyn Logger> = match (&console, &file) {
        (Some(c), None) => c.clone() as Arc<dyn Logger>,
        (None, Some(f)) => f.clone() as Arc<dyn Logger>,
        _ => {
            let mut loggers: Vec<Arc<dyn Logger>> = Vec::with_capacity(2);
            if let Some(c) = &console {
                loggers.push(c.clone());
            }
            if let Some(f) = &file {
                loggers.push(f.clone());
            }
            Arc::new(MultiLogger::new(loggers))
        }
    };

    Ok(LogSetup {
        logger,
        console,
        file,
    })
}

/// Same as [`build`], keeping only the logger.
///
/// # Errors
///
/// Returns a [`LogError`] for unparsable values or an unopenable file.
pub fn from_config(config: &Config) -> Result<Arc<dyn Logger>, LogError> {
    Ok(build(config)?.logger)
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if path_str.starts_with("~/") || path_str.starts_with("~\\") {
                home_path.push(&path_str[2..]);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::fs;

    #[test]
    fn file_only_config_gates_by_file_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.log");
        let cfg = Config::parse(&format!(
            "[Logging]\nconsole = none\nfile = {}\nfile_level = warn\nflags =\nprefix = \"svc \"\n",
            path.display()
        ));

        let logger = from_config(&cfg).unwrap();
        logger.info(format_args!("skip"));
        logger.warn(format_args!("keep"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "svc [WARN] keep\n");
    }

    #[test]
    fn file_level_defaults_to_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lvl.log");
        let cfg = Config::parse(&format!(
            "[Logging]\nconsole = none\nlevel = error\nflags =\nfile = {}\n",
            path.display()
        ));

        let logger = from_config(&cfg).unwrap();
        logger.warn(format_args!("w"));
        logger.error(format_args!("e"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "[ERROR] e\n");
    }

    #[test]
    fn console_and_file_are_both_fed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("both.log");
        let cfg = Config::parse(&format!(
            "[Logging]\nconsole = stderr\ncolor = never\nlevel = debug\nfile = {}\n",
            path.display()
        ));

        let logger = from_config(&cfg).unwrap();
        logger.debug(format_args!("to both"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("[DEBUG] to both\n"), "got {text:?}");
    }

    #[test]
    fn no_sinks_yields_silent_logger() {
        let cfg = Config::parse("[Logging]\nconsole = none\n");
        let logger = from_config(&cfg).unwrap();
        logger.error(format_args!("discarded"));
        logger.fatal_no_exit(format_args!("discarded"));
    }

    #[test]
    fn invalid_values_are_reported() {
        let bad_level = Config::parse("[Logging]\nlevel = loud\n");
        assert!(matches!(from_config(&bad_level), Err(LogError::InvalidLevel(_))));

        let bad_console = Config::parse("[Logging]\nconsole = printer\n");
        assert!(matches!(
            from_config(&bad_console),
            Err(LogError::InvalidValue { .. })
        ));

        let bad_flags = Config::parse("[Logging]\nflags = date,lines\n");
        assert!(matches!(from_config(&bad_flags), Err(LogError::InvalidFlag(_))));
    }

    #[test]
    fn unopenable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::parse(&format!(
            "[Logging]\nconsole = none\nfile = {}\n",
            dir.path().join("missing").join("x.log").display()
        ));
        assert!(matches!(from_config(&cfg), Err(LogError::Open { .. })));
    }

    #[test]
    fn console_none_is_case_insensitive() {
        let cfg = Config::parse("[Logging]\nconsole = None\n");
        let setup = build(&cfg).unwrap();
        assert!(setup.console.is_none());
        assert!(setup.file.is_none());

        let cfg = Config::parse("[Logging]\nconsole = STDERR\ncolor = never\n");
        assert!(build(&cfg).unwrap().console.is_some());
    }

    #[test]
    fn handles_retune_the_built_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handles.log");
        let cfg = Config::parse(&format!(
            "[Logging]\nconsole = stderr\ncolor = never\nlevel = error\nflags =\nfile = {}\n",
            path.display()
        ));

        let setup = build(&cfg).unwrap();
        setup.logger.info(format_args!("before"));
        setup.file.as_ref().unwrap().set_level(Level::Info);
        setup.logger.info(format_args!("after"));
        assert_eq!(setup.console.as_ref().unwrap().level(), Level::Error);

        setup.set_level(Level::NoLog);
        setup.logger.error(format_args!("muted"));
        assert_eq!(setup.console.as_ref().unwrap().level(), Level::NoLog);

        assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] after\n");
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_path("/var/log/a.log"), PathBuf::from("/var/log/a.log"));
        assert_eq!(expand_path("~user/x"), PathBuf::from("~user/x"));
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_path("~/a.log"), PathBuf::from(home).join("a.log"));
        }
    }
}
