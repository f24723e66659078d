//! Record processors and the stack that runs them

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Transforms a record before it is formatted.
///
/// Any `Fn(LogRecord) -> LogRecord` closure is a processor:
///
/// ```
/// use rust_log_pipeline::core::{LogLevel, LogRecord, Processor};
///
/// let add_host = |record: LogRecord| record.with_extra_field("host", "web-1");
/// let record = add_host.process(LogRecord::new(LogLevel::Info, "app", "hi"));
/// assert!(record.extra().contains_key("host"));
/// ```
pub trait Processor: Send + Sync {
    fn process(&self, record: LogRecord) -> LogRecord;

    /// Clear per-run state, if any
    fn reset(&self) {}
}

impl<F> Processor for F
where
    F: Fn(LogRecord) -> LogRecord + Send + Sync,
{
    fn process(&self, record: LogRecord) -> LogRecord {
        self(record)
    }
}

pub type SharedProcessor = Arc<dyn Processor>;

/// LIFO stack of processors
///
/// The most recently pushed processor runs first; each one receives the
/// previous one's output.
#[derive(Default)]
pub struct ProcessorStack {
    processors: Mutex<Vec<SharedProcessor>>,
}

impl ProcessorStack {
    pub fn new() -> Self {
        Self {
            processors: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, processor: SharedProcessor) {
        self.processors.lock().push(processor);
    }

    pub fn pop(&self) -> Result<SharedProcessor> {
        self.processors
            .lock()
            .pop()
            .ok_or_else(|| LoggerError::empty_stack("processor"))
    }

    pub fn len(&self) -> usize {
        self.processors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.lock().is_empty()
    }

    /// Run every processor over `record`, newest first
    pub fn apply(&self, record: LogRecord) -> LogRecord {
        let processors = self.processors.lock();
        processors
            .iter()
            .rev()
            .fold(record, |record, processor| processor.process(record))
    }

    pub fn reset(&self) {
        for processor in self.processors.lock().iter() {
            processor.reset();
        }
    }
}

impl Clone for ProcessorStack {
    /// Snapshot sharing the same processor instances
    fn clone(&self) -> Self {
        Self {
            processors: Mutex::new(self.processors.lock().clone()),
        }
    }
}

impl fmt::Debug for ProcessorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorStack")
            .field("len", &self.len())
            .finish()
    }
}
