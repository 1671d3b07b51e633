use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::log_level::{LogLevel, ParseLevelError};
use crate::logger::Logger;

/// Errors from loading logger settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The `min_level` value is not a recognized level name.
    InvalidLevel(ParseLevelError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "error reading settings file {}: {source}", path.display())
            }
            Self::InvalidLevel(err) => write!(f, "invalid min_level: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidLevel(err) => Some(err),
        }
    }
}

/// Logger settings parsed from the `[logging]` section of an INI-style
/// config file.
///
/// Recognized keys: `min_level` (a level name), `log_file` (a path, `~`
/// expands to the home directory), and `enabled` (anything but `false`
/// counts as true). Keys outside the `[logging]` section and unknown keys
/// inside it are ignored, so the logger section can live in a larger
/// application config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter threshold to apply, if set.
    pub min_level: Option<LogLevel>,
    /// Log file to open in append mode, if set.
    pub log_file: Option<PathBuf>,
    /// When false, [`apply`](Self::apply) leaves the logger untouched.
    pub enabled: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            min_level: None,
            log_file: None,
            enabled: true,
        }
    }
}

impl LogSettings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when the file cannot be read and
    /// [`SettingsError::InvalidLevel`] when `min_level` does not name a
    /// level.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ini_str(&content)
    }

    /// Parses settings from an in-memory INI document.
    ///
    /// Lines are `key = value` pairs under `[section]` headers; blank lines
    /// and lines starting with `#` are skipped; values may be double-quoted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidLevel`] when `min_level` does not
    /// name a level.
    pub fn from_ini_str(content: &str) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        let mut in_logging = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                in_logging = line[1..line.len() - 1].eq_ignore_ascii_case("logging");
                continue;
            }

            if !in_logging {
                continue;
            }

            let Some(pos) = line.find('=') else {
                continue;
            };
            let key = line[..pos].trim();
            let value = line[pos + 1..].trim().trim_matches('"');

            match key {
                "min_level" => {
                    let level = value
                        .parse::<LogLevel>()
                        .map_err(SettingsError::InvalidLevel)?;
                    settings.min_level = Some(level);
                }
                "log_file" => settings.log_file = Some(expand_path(value)),
                "enabled" => settings.enabled = !value.eq_ignore_ascii_case("false"),
                _ => {}
            }
        }

        Ok(settings)
    }

    /// Pushes the parsed values through the logger's setters.
    ///
    /// Unset fields leave the corresponding logger state alone. When
    /// `enabled` is false nothing is applied.
    pub fn apply(&self, logger: &Logger) {
        if !self.enabled {
            return;
        }
        if let Some(level) = self.min_level {
            logger.set_min_level(level);
        }
        if let Some(path) = &self.log_file {
            logger.set_log_file(path);
        }
    }
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
