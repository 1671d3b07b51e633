//! Leveled logging macros over anything implementing `log`.
//!
//! Each macro renders its `format!`-style arguments once and hands the
//! resulting string to the sink, so arbitrary printable values mix freely
//! with literal text. Without the `logging` feature every macro expands to
//! `()`, removing all formatting and allocation overhead at compile time.

// Generic worker. The level macros below delegate here; it stays available
// for call sites that pick the level at runtime.
#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $sink.log($lvl, &__msg);
    }};
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log_level::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log_level::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warning { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log_level::LogLevel::Warning, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log_level::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_critical { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log_level::LogLevel::Critical, $($arg)*) } }

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => {
        ()
    };
}
