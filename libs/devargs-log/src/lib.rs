#![no_std]

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

#[derive(Clone, Copy)]
pub struct Sink {
    pub level: LevelFilter,
    pub write: fn(&Record),
}

/// Fans every record out to the sinks whose level admits it.
pub struct Logger<const N: usize> {
    pub sinks: [Sink; N],
}

impl<const N: usize> Logger<N> {
    pub fn max_level(&self) -> LevelFilter {
        self.sinks
            .iter()
            .map(|sink| sink.level)
            .max()
            .unwrap_or(LevelFilter::Off)
    }

    /// Sets this as the global logger, capped at `level`.
    pub fn install(&'static self, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(level.min(self.max_level()));
        Ok(())
    }
}

impl<const N: usize> Log for Logger<N> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && self.sinks.iter().any(|sink| metadata.level() <= sink.level)
    }

    fn log(&self, record: &Record) {
        if record.level() > log::max_level() {
            return;
        }
        for sink in &self.sinks {
            if record.level() <= sink.level {
                (sink.write)(record)
            }
        }
    }

    fn flush(&self) {}
}
