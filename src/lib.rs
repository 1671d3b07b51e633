//! dualog is a minimal process-wide logging facility: callers emit leveled
//! messages of arbitrary printable types, the facility filters by severity,
//! timestamps each line, and fans out to a console sink plus an optional
//! append-mode log file under a single ordering lock.
//!
//! Records are filtered against a minimum level (default `Info`) before any
//! lock is taken. Passing records are written as
//! `YYYY-MM-DD HH:MM:SS [LEVEL]: message` to the console sink and, when a log
//! file is open, to that file as well; the lock keeps lines from concurrent
//! callers intact. A log file that cannot be opened degrades to console-only
//! logging with a diagnostic; logging itself never fails the caller.
//!
//! Building with `--no-default-features` disables the `logging` feature and
//! compiles the whole facility to no-ops.
//!
//! ```
//! use dualog::{LogLevel, Logger, MessageBuilder, log_info, log_debug};
//!
//! let logger = Logger::new();
//! logger.set_min_level(LogLevel::Debug);
//!
//! log_info!(logger, "Starting program...");
//! log_debug!(logger, "The value is: {}", 42);
//!
//! let line = MessageBuilder::new()
//!     .text("Data: ")
//!     .hex()
//!     .int(0xDEAD_BEEF_u32)
//!     .finish();
//! logger.debug(&line);
//! ```

/// Loading logger settings from an INI-style config file.
pub mod config;
/// Severity levels and their ordering.
pub mod log_level;
/// Leveled logging macros; compiled to no-ops without the `logging` feature.
pub mod log_macros;
/// The sink capability trait.
pub mod log_sink;
/// The dual-sink log writer.
pub mod logger;
/// Incremental composition of one rendered message.
pub mod message;
/// A sink that discards everything.
pub mod noop_log_sink;

pub use config::{LogSettings, SettingsError};
pub use log_level::{LogLevel, ParseLevelError};
pub use log_sink::LogSink;
pub use logger::{Logger, global};
pub use message::{IntFormat, MessageBuilder};
pub use noop_log_sink::NoopLogSink;
