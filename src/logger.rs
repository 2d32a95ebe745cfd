//! In-memory logger.
//!
//! Scrolled frames report their scrollbar toggles and measurements through
//! the `log` facade. Applications without a logger of their own can install
//! this one and read the records back from [`LOGS`].

use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Saves all log records in a global deque.
pub struct FrameLogger;

static LOGGER: FrameLogger = FrameLogger;

/// A log record.
pub struct Record {
    /// Log level used for this record
    pub level: log::Level,
    /// Module that emitted the record
    pub target: String,
    /// Time this message was logged
    pub time: time::OffsetDateTime,
    /// Message content
    pub message: String,
}

lazy_static! {
    /// Circular buffer for logs.
    pub static ref LOGS: Mutex<VecDeque<Record>> =
        Mutex::new(VecDeque::new());
}

/// Log a record in the global log queue.
pub fn log(record: &log::Record<'_>) {
    let mut logs = LOGS.lock().unwrap();
    if logs.len() == logs.capacity() {
        logs.pop_front();
    }
    logs.push_back(Record {
        level: record.level(),
        target: record.target().to_string(),
        message: format!("{}", record.args()),
        time: time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc()),
    });
}

impl log::Log for FrameLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        log(record);
    }

    fn flush(&self) {}
}

/// Initialize the in-memory logger.
///
/// Fails if another logger was already installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    reserve_logs(1_000);

    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);

    Ok(())
}

/// Return a logger that stores records in the global log queue.
///
/// An easier alternative might be to use [`init()`].
pub fn get_logger() -> FrameLogger {
    reserve_logs(1_000);
    FrameLogger
}

/// Adds `n` more entries to the log queue.
///
/// You should call this if you're not using `init()` nor `get_logger()`.
pub fn reserve_logs(n: usize) {
    LOGS.lock().unwrap().reserve(n);
}

/// Returns the messages currently stored for the given target prefix.
pub fn messages_for(target: &str) -> Vec<String> {
    LOGS.lock()
        .unwrap()
        .iter()
        .filter(|record| record.target.starts_with(target))
        .map(|record| record.message.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn records_are_kept() {
        let logger = get_logger();
        logger.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .target("autoscroll::logger::tests")
                .args(format_args!("showing vertical scrollbar"))
                .build(),
        );

        let messages = messages_for("autoscroll::logger::tests");
        assert!(messages.iter().any(|m| m == "showing vertical scrollbar"));
    }
}
