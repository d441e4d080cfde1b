use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "MINIMESSAGE_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name; unknown names fall back to `warn`.
pub fn level_from_str(value: &str) -> LevelFilter {
    value
        .parse::<Level>()
        .map(|level| level.to_level_filter())
        .unwrap_or(LevelFilter::Warn)
}

pub fn init_logger() {
    let level = std::env::var(LOG_ENV)
        .map(|value| level_from_str(&value))
        .unwrap_or(LevelFilter::Warn);
    let logger = StderrLogger { level };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}
