#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes records to stderr so stdout stays free for boards and read-outs.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by the `BROADSIDE_LOG` environment variable, `info` when unset
/// or unparsable.
pub fn level_from_env() -> LevelFilter {
    env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger. Calling it again is harmless.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
