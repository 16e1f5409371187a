//! Test logger keeping each thread's records so tests can assert on them.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture;
static INIT: Once = Once::new();

/// Installs the logger on first use and clears this thread's records.
pub fn start() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub fn records() -> Vec<(Level, String)> {
    RECORDS.with(|r| r.borrow().clone())
}

pub fn at(level: Level) -> Vec<String> {
    records()
        .into_iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, msg)| msg)
        .collect()
}
