//! `log` backend writing to the host's debug log.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::PLUGIN_NAME;

type Sink = Box<dyn Fn(&str) + Send + Sync>;

/// Forwards records to a host debug-string function, one prefixed line per
/// message line.
pub struct HostLogger {
    sink: Sink,
    level: LevelFilter,
}

impl HostLogger {
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static, level: LevelFilter) -> Self {
        Self { sink: Box::new(sink), level }
    }
}

/// Prefix every line with the plugin name; continuation lines get blanks of
/// the same width so they align in the host log.
pub fn format_message(level: Level, message: &str) -> String {
    let prefix = format!("{}: ", PLUGIN_NAME);
    let blank = " ".repeat(prefix.len());
    let mut out = String::new();

    for (i, line) in message.lines().enumerate() {
        out.push_str(if i == 0 { &prefix } else { &blank });
        if i == 0 && level <= Level::Warn {
            out.push_str(&level.as_str().to_ascii_lowercase());
            out.push_str(": ");
        }
        out.push_str(line);
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str(&prefix);
        out.push('\n');
    }
    out
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            (self.sink)(&format_message(record.level(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Install the host logger as the global `log` backend.
///
/// Returns false when a logger is already installed; the first one stays.
pub fn init(sink: impl Fn(&str) + Send + Sync + 'static, level: LevelFilter) -> bool {
    match log::set_boxed_logger(Box::new(HostLogger::new(sink, level))) {
        Ok(()) => {
            log::set_max_level(level);
            true
        }
        Err(_) => false,
    }
}
