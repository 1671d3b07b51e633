use crate::log_level::LogLevel;

pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);
}
