use std::fmt;
use std::str::FromStr;

/// Defines the severity levels for log messages.
///
/// Levels order from least to most severe, so `level >= threshold` decides
/// whether a record passes the filter.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug = 0,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info = 1,
    /// Designates potentially harmful situations.
    Warning = 2,
    /// Designates error events that might still allow the application to continue running.
    Error = 3,
    /// Designates severe error events that presumably endanger the application itself.
    Critical = 4,
}

impl LogLevel {
    /// The line prefix fragment for this level, e.g. `"[WARNING]: "`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]: ",
            Self::Info => "[INFO]: ",
            Self::Warning => "[WARNING]: ",
            Self::Error => "[ERROR]: ",
            Self::Critical => "[CRITICAL]: ",
        }
    }

    /// The bare level name, e.g. `"WARNING"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Inverse of `level as u8`, used to round-trip the atomic threshold
    /// store. Values outside the repr range map to the `Info` default.
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warning,
            3 => Self::Error,
            4 => Self::Critical,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    value: String,
}

impl ParseLevelError {
    /// The string that failed to parse.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level `{}`, expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL",
            self.value
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("warning") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("critical") {
            Ok(Self::Critical)
        } else {
            Err(ParseLevelError {
                value: s.to_string(),
            })
        }
    }
}
