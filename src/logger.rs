//! Logging to `stderr`, keeping `stdout` free for the prompt.

use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

use crate::errors::AppError;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!(
                "{:<5} {:<8} {}",
                record.level(),
                record.target(),
                record.args()
            );
            let _ = writeln!(&mut io::stderr(), "{message}");
        }
    }

    fn flush(&self) {}
}

/// Install the `stderr` logger. Only the first call in a process succeeds.
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level);

    Ok(())
}

/// Parse a level name such as `info` or `off`, falling back to [`DEFAULT_LEVEL`].
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("OFF"), LevelFilter::Off);
        assert_eq!(parse_level("nonsense"), DEFAULT_LEVEL);
    }

    #[test]
    fn filters_below_level() {
        let logger = StderrLogger::new(LevelFilter::Info);

        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
