//! Test helpers for decks built on this crate.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps records on the thread that emitted them, so parallel
/// tests each see only their own output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Run `f` and return its result with every log record it emitted on this thread.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let result = f();
    let records = RECORDS.with(|r| r.borrow_mut().drain(..).collect());
    (result, records)
}

/// True if `records` holds a warning whose message contains `needle`.
pub fn has_warning(records: &[(Level, String)], needle: &str) -> bool {
    records
        .iter()
        .any(|(level, message)| *level == Level::Warn && message.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_only_records_from_the_closure() {
        log::warn!("before");
        let (value, records) = capture_logs(|| {
            log::warn!("inside {}", 1);
            7
        });
        assert_eq!(value, 7);
        assert_eq!(records, vec![(Level::Warn, "inside 1".to_string())]);
        assert!(has_warning(&records, "inside"));
    }
}
