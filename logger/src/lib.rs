extern crate env_logger;
extern crate log;

use env_logger::LogBuilder;
use log::LogLevelFilter;
use log::LogRecord;
use std::env;

/// Maps the number of `-v` flags to a default log level.
pub fn level_for_verbosity(verbosity: u64) -> LogLevelFilter {
    match verbosity {
        0 => LogLevelFilter::Warn,
        1 => LogLevelFilter::Info,
        2 => LogLevelFilter::Debug,
        _ => LogLevelFilter::Trace,
    }
}

/// Installs the global logger, configured by `RUST_LOG` only.
pub fn init() {
    init_with_filter(LogLevelFilter::Warn);
}

/// Installs the global logger with a default level derived from
/// `verbosity`. `RUST_LOG` directives are applied on top.
pub fn init_with_verbosity(verbosity: u64) {
    init_with_filter(level_for_verbosity(verbosity));
}

fn init_with_filter(default: LogLevelFilter) {
    let mut builder = LogBuilder::new();
    builder.format(|record: &LogRecord| format!("{}: {}", record.level(), record.args()));
    builder.filter(None, default);
    if let Ok(directives) = env::var("RUST_LOG") {
        builder.parse(&directives);
    }
    if let Err(e) = builder.init() {
        eprintln!("failed to initialize logger: {}", e);
    }
}
