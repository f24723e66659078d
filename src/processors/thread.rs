//! Thread identity processor

use crate::core::{FieldValue, LogRecord, Processor};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Adds `extra.thread_id` and `extra.thread_name` for the logging thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadProcessor;

impl ThreadProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for ThreadProcessor {
    fn process(&self, record: LogRecord) -> LogRecord {
        record
            .with_extra_field("thread_id", current_thread_id())
            .with_extra_field("thread_name", FieldValue::from(current_thread_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_named_thread() {
        let handle = std::thread::Builder::new()
            .name("worker-7".to_string())
            .spawn(|| ThreadProcessor::new().process(LogRecord::new(LogLevel::Info, "app", "x")))
            .unwrap();
        let record = handle.join().unwrap();

        assert_eq!(
            record.extra().get("thread_name").and_then(FieldValue::as_str),
            Some("worker-7")
        );
        assert!(record.extra().contains_key("thread_id"));
    }
}
