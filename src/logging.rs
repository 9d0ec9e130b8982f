#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level, e.g. `BROADSIDE_LOG=debug`.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Level for a raw `BROADSIDE_LOG` value: case-insensitive level name,
/// `info` when missing or unrecognised.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stdout logger at the level named by `BROADSIDE_LOG`.
/// Returns the level in effect. Later calls keep the first logger but
/// still update the level.
pub fn init_logging() -> LevelFilter {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    level
}
