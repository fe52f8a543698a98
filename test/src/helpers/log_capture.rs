use std::{
    sync::{Mutex, Once},
    thread::{self, ThreadId},
};

use log::{Level, LevelFilter, Log, Metadata, Record};

static INSTALL: Once = Once::new();
static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Global logger that keeps every record, keyed by the thread that emitted
/// it, so parallel tests only see their own output.
///
/// Replaces env_logger for the test binary it is installed in.
pub struct LogCapture;

impl LogCapture {
    pub fn install() {
        INSTALL.call_once(|| {
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
    }

    /// Messages logged at `level` by the current thread
    pub fn messages(level: Level) -> Vec<String> {
        let current = thread::current().id();
        LOGGER
            .records
            .lock()
            .map(|records| {
                records
                    .iter()
                    .filter(|(thread, record_level, _)| *thread == current && *record_level == level)
                    .map(|(_, _, message)| message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn warnings() -> Vec<String> {
        Self::messages(Level::Warn)
    }

    /// Forgets the current thread's records
    pub fn clear() {
        let current = thread::current().id();
        if let Ok(mut records) = LOGGER.records.lock() {
            records.retain(|(thread, _, _)| *thread != current);
        }
    }
}
