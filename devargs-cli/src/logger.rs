use devargs_log::{Logger, Sink};
use log::{LevelFilter, Record};

fn stderr_sink(record: &Record) {
    eprintln!("[{}][{}] {}", record.target(), record.level(), record.args());
}

static LOGGER: Logger<1> = Logger {
    sinks: [Sink {
        level: LevelFilter::Trace,
        write: stderr_sink,
    }],
};

pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    LOGGER
        .install(level)
        .map_err(|err| anyhow::anyhow!("Cannot set up the logger: {err}"))
}
