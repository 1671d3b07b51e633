use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::{
        Arc, Mutex, OnceLock,
        atomic::{AtomicU8, Ordering},
    },
};

#[cfg(feature = "logging")]
use std::fs::OpenOptions;

#[cfg(feature = "logging")]
use chrono::Local;

use crate::log_level::LogLevel;
use crate::log_sink::LogSink;

struct Sinks {
    console: Box<dyn Write + Send>,
    file: Option<File>,
}

struct Shared {
    /// Filter threshold, stored as the level's `repr` value.
    ///
    /// Read with `Relaxed` on every `log` call so the filtered-out path stays
    /// lock-free. Threshold changes are startup-time in practice, so eventual
    /// visibility to in-flight callers is accepted.
    min_level: AtomicU8,
    /// Guards the whole format-and-write sequence and every sink swap, so
    /// lines from concurrent callers never splice and the console line and
    /// file line of one call stay adjacent.
    sinks: Mutex<Sinks>,
}

/// Dual-sink log writer: every passing record goes to the console sink and,
/// when a log file is open, to that file as well, in that order, under one
/// lock.
///
/// `Logger` is a cheap handle over shared state; clone it freely to hand the
/// logging capability to other modules or threads, or use [`global`] for a
/// process-wide instance. Records below the current threshold are dropped
/// without taking the lock. No operation on the logging surface returns an
/// error or panics: a log file that cannot be opened degrades to console-only
/// logging, and write failures on an open sink are swallowed per line.
///
/// # Example
///
/// ```
/// use dualog::{LogLevel, Logger, log_info};
///
/// let logger = Logger::new();
/// logger.set_min_level(LogLevel::Debug);
/// log_info!(logger, "Starting program...");
/// ```
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
}

impl Logger {
    /// Creates a logger writing to standard output, threshold `Info`, no
    /// file sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console_sink(Box::new(io::stdout()))
    }

    /// Creates a logger with the given console sink, threshold `Info`, no
    /// file sink.
    #[must_use]
    pub fn with_console_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            shared: Arc::new(Shared {
                min_level: AtomicU8::new(LogLevel::Info as u8),
                sinks: Mutex::new(Sinks {
                    console: sink,
                    file: None,
                }),
            }),
        }
    }

    /// Sets the minimum severity that passes through to the sinks.
    pub fn set_min_level(&self, level: LogLevel) {
        #[cfg(feature = "logging")]
        self.shared.min_level.store(level as u8, Ordering::Relaxed);
        #[cfg(not(feature = "logging"))]
        let _ = level;
    }

    /// Returns the current filter threshold.
    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        LogLevel::from_u8(self.shared.min_level.load(Ordering::Relaxed))
    }

    /// Replaces the console destination. The file sink is untouched.
    pub fn set_console_sink(&self, sink: Box<dyn Write + Send>) {
        if let Ok(mut sinks) = self.shared.sinks.lock() {
            sinks.console = sink;
        }
    }

    /// Opens `path` in append mode and duplicates subsequent log lines to it
    /// until replaced or the process ends.
    ///
    /// The new file is opened before the swap, so on failure a previously
    /// working file sink keeps working (and stays closed if none was open).
    /// Failure is reported as a diagnostic line on the console sink and is
    /// never fatal. Replacing an open file closes the previous one.
    pub fn set_log_file(&self, path: impl AsRef<Path>) {
        #[cfg(feature = "logging")]
        {
            let path = path.as_ref();
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    if let Ok(mut sinks) = self.shared.sinks.lock() {
                        sinks.file = Some(file);
                    }
                }
                Err(err) => {
                    if let Ok(mut sinks) = self.shared.sinks.lock() {
                        let _ = writeln!(
                            sinks.console,
                            "Failed to open log file {}: {err}",
                            path.display()
                        );
                        let _ = sinks.console.flush();
                    }
                }
            }
        }
        #[cfg(not(feature = "logging"))]
        let _ = path;
    }

    /// Writes one record if `level` passes the threshold.
    ///
    /// The emitted line is `YYYY-MM-DD HH:MM:SS [LEVEL]: text` followed by a
    /// newline, identical on both sinks. Two calls within the same second
    /// share a timestamp; write order under the lock resolves their order.
    pub fn log(&self, level: LogLevel, text: &str) {
        #[cfg(feature = "logging")]
        {
            if level < self.min_level() {
                return;
            }
            let Ok(mut sinks) = self.shared.sinks.lock() else {
                return;
            };
            let prefix = format!(
                "{} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level.tag()
            );
            let _ = writeln!(sinks.console, "{prefix}{text}");
            let _ = sinks.console.flush();
            if let Some(file) = sinks.file.as_mut() {
                let _ = writeln!(file, "{prefix}{text}");
            }
        }
        #[cfg(not(feature = "logging"))]
        let _ = (level, text);
    }

    /// Logs `text` at `Debug`.
    pub fn debug(&self, text: &str) {
        self.log(LogLevel::Debug, text);
    }

    /// Logs `text` at `Info`.
    pub fn info(&self, text: &str) {
        self.log(LogLevel::Info, text);
    }

    /// Logs `text` at `Warning`.
    pub fn warning(&self, text: &str) {
        self.log(LogLevel::Warning, text);
    }

    /// Logs `text` at `Error`.
    pub fn error(&self, text: &str) {
        self.log(LogLevel::Error, text);
    }

    /// Logs `text` at `Critical`.
    pub fn critical(&self, text: &str) {
        self.log(LogLevel::Critical, text);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for Logger {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        Logger::log(self, level, msg);
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Lazily initialized process-wide logger.
///
/// The first call creates a [`Logger`] with defaults (stdout, threshold
/// `Info`, no file); later calls return the same instance. Prefer passing an
/// explicitly constructed [`Logger`] from the application's composition
/// point; this accessor covers call sites with no context to thread one
/// through.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

#[cfg(all(test, feature = "logging"))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Console capture: a clonable `Write` over a shared byte buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logger() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::with_console_sink(Box::new(buf.clone()));
        (logger, buf)
    }

    #[test]
    fn default_threshold_is_info() {
        let (logger, buf) = captured_logger();
        logger.debug("dropped");
        logger.info("kept");
        let out = buf.contents();
        assert!(!out.contains("dropped"));
        assert!(out.contains("[INFO]: kept"));
    }

    #[test]
    fn threshold_change_is_visible_to_later_calls() {
        let (logger, buf) = captured_logger();
        logger.set_min_level(LogLevel::Error);
        logger.warning("dropped");
        logger.set_min_level(LogLevel::Debug);
        logger.debug("kept");
        let out = buf.contents();
        assert!(!out.contains("dropped"));
        assert!(out.contains("[DEBUG]: kept"));
    }

    #[test]
    fn replacing_console_sink_redirects_output() {
        let (logger, old_buf) = captured_logger();
        let new_buf = SharedBuf::default();
        logger.set_console_sink(Box::new(new_buf.clone()));
        logger.info("redirected");
        assert!(old_buf.contents().is_empty());
        assert!(new_buf.contents().contains("redirected"));
    }

    #[test]
    fn logger_usable_through_sink_trait() {
        let (logger, buf) = captured_logger();
        let sink: &dyn LogSink = &logger;
        sink.log(LogLevel::Error, "via trait");
        assert!(buf.contents().contains("[ERROR]: via trait"));
    }

    #[test]
    fn clones_share_state() {
        let (logger, buf) = captured_logger();
        let clone = logger.clone();
        clone.set_min_level(LogLevel::Debug);
        assert_eq!(logger.min_level(), LogLevel::Debug);
        clone.debug("from clone");
        assert!(buf.contents().contains("from clone"));
    }
}
