use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::log::log_error::LogError;

/// INI-style configuration: `key = value` pairs, optionally grouped under
/// `[section]` headers. Lines starting with `#` or `;` are comments.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::ConfigRead`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Malformed lines are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim();
                current_section = Some(name.to_string());
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_or_default<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .or_else(|| self.get_global(key))
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_non_empty_or_default<'a>(
        &'a self,
        section: &str,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const SAMPLE: &str = r#"
# global defaults
level = warn

[Logging]
console = "stdout"
; comment
file =
prefix = app:

[ Other ]
level=debug
"#;

    #[test]
    fn parses_globals_and_sections() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get_global("level"), Some("warn"));
        assert_eq!(cfg.get("Logging", "console"), Some("stdout"));
        assert_eq!(cfg.get("Logging", "prefix"), Some("app:"));
        assert_eq!(cfg.get("Other", "level"), Some("debug"));
        assert_eq!(cfg.get("Logging", "missing"), None);
    }

    #[test]
    fn empty_values_fall_back() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get("Logging", "file"), Some(""));
        assert_eq!(cfg.get_non_empty("Logging", "file"), None);
        assert_eq!(cfg.get_non_empty_or_default("Logging", "file", "x.log"), "x.log");
        assert_eq!(cfg.get_or_default("Logging", "level", "info"), "warn");
        assert_eq!(Config::empty().get_or_default("Logging", "level", "info"), "info");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.conf")).unwrap_err();
        assert!(matches!(err, LogError::ConfigRead { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "[Logging]\nlevel = error\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.get("Logging", "level"), Some("error"));
    }
}
