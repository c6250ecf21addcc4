//! CLI helpers.

use anyhow::{anyhow, Result};
use log::{LevelFilter, Log};

static STDERR_LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger.
///
/// Computed sums go to stdout, so all diagnostics stay on stderr.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    log::set_max_level(level);
    log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set logger: {error}"))?;
    Ok(())
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        eprintln!(
            "{file}:{line}: {}: {}",
            record.level(),
            record.args(),
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {}
}
