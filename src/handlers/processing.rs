//! Standard concrete handler: level threshold, processors, formatter, appender

use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
use crate::core::{
    Appender, Formattable, Handler, LogLevel, LogRecord, LoggerError, Processable,
    ProcessorStack, Resettable, Result, SharedFormatter, SharedProcessor,
};
use crate::formatters::LineFormatter;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handler that processes, formats and writes records to an [`Appender`]
///
/// Records below the handler's level are not handled. Handled records are
/// copied, run through the processor stack, formatted and appended. `handle`
/// returns `true` (stop bubbling) only when `bubble` is off.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// let handler = TestHandler::capturing(LogLevel::Info);
/// let record = LogRecord::new(LogLevel::Error, "app", "disk full");
///
/// assert!(!handler.handle(&record).unwrap());
/// assert!(handler.has_record(LogLevel::Error, "disk full"));
/// ```
pub struct ProcessingHandler<A: Appender> {
    name: String,
    level: RwLock<LogLevel>,
    bubble: AtomicBool,
    processors: ProcessorStack,
    formatter: RwLock<SharedFormatter>,
    appender: Mutex<A>,
    closed: AtomicBool,
}

pub type StreamHandler = ProcessingHandler<ConsoleAppender>;
pub type FileHandler = ProcessingHandler<FileAppender>;
pub type TestHandler = ProcessingHandler<MemoryAppender>;

impl<A: Appender> ProcessingHandler<A> {
    pub fn new(appender: A, level: LogLevel) -> Self {
        Self {
            name: appender.name().to_string(),
            level: RwLock::new(level),
            bubble: AtomicBool::new(true),
            processors: ProcessorStack::new(),
            formatter: RwLock::new(Arc::new(LineFormatter::new())),
            appender: Mutex::new(appender),
            closed: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_bubble(self, bubble: bool) -> Self {
        self.bubble.store(bubble, Ordering::Relaxed);
        self
    }

    #[must_use]
    pub fn with_formatter(self, formatter: SharedFormatter) -> Self {
        *self.formatter.write() = formatter;
        self
    }

    #[must_use]
    pub fn with_processor(self, processor: SharedProcessor) -> Self {
        self.processors.push(processor);
        self
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn bubble(&self) -> bool {
        self.bubble.load(Ordering::Relaxed)
    }

    pub fn set_bubble(&self, bubble: bool) {
        self.bubble.store(bubble, Ordering::Relaxed);
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Lock and borrow the underlying appender
    pub fn appender(&self) -> MutexGuard<'_, A> {
        self.appender.lock()
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(LoggerError::handler_closed(self.name.as_str()));
        }
        Ok(())
    }
}

impl<A: Appender> Handler for ProcessingHandler<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_handling(&self, record: &LogRecord) -> bool {
        !self.is_closed() && record.level() >= self.level()
    }

    fn handle(&self, record: &LogRecord) -> Result<bool> {
        self.ensure_open()?;
        if !self.is_handling(record) {
            return Ok(false);
        }

        let record = self.processors.apply(record.clone());
        let formatted = self.formatter.read().format(&record)?;
        self.appender.lock().append(&record, &formatted)?;

        Ok(!self.bubble())
    }

    /// Process the handled records, format them together and append once
    fn handle_batch(&self, records: &[LogRecord]) -> Result<()> {
        self.ensure_open()?;
        let processed: Vec<LogRecord> = records
            .iter()
            .filter(|record| self.is_handling(record))
            .map(|record| self.processors.apply(record.clone()))
            .collect();
        if processed.is_empty() {
            return Ok(());
        }

        let formatted = self.formatter.read().format_batch(&processed)?;
        self.appender.lock().append_batch(&processed, &formatted)
    }

    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.appender.lock().close()
    }

    fn as_processable(&self) -> Option<&dyn Processable> {
        Some(self)
    }

    fn as_formattable(&self) -> Option<&dyn Formattable> {
        Some(self)
    }

    fn as_resettable(&self) -> Option<&dyn Resettable> {
        Some(self)
    }
}

impl<A: Appender> Processable for ProcessingHandler<A> {
    fn push_processor(&self, processor: SharedProcessor) -> Result<()> {
        self.processors.push(processor);
        Ok(())
    }

    fn pop_processor(&self) -> Result<SharedProcessor> {
        self.processors.pop()
    }
}

impl<A: Appender> Formattable for ProcessingHandler<A> {
    fn set_formatter(&self, formatter: SharedFormatter) -> Result<()> {
        *self.formatter.write() = formatter;
        Ok(())
    }

    fn formatter(&self) -> Result<SharedFormatter> {
        Ok(Arc::clone(&self.formatter.read()))
    }
}

impl<A: Appender> Resettable for ProcessingHandler<A> {
    fn reset(&self) {
        self.processors.reset();
        self.appender.lock().reset();
    }
}

impl ProcessingHandler<ConsoleAppender> {
    /// Colored console output, errors to stderr
    pub fn console(level: LogLevel) -> Self {
        Self::new(ConsoleAppender::new(), level)
    }
}

impl ProcessingHandler<FileAppender> {
    pub fn open(path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        Ok(Self::new(FileAppender::new(path)?, level))
    }
}

impl ProcessingHandler<MemoryAppender> {
    /// Handler that keeps every record it handles in memory
    pub fn capturing(level: LogLevel) -> Self {
        Self::new(MemoryAppender::new(), level)
    }

    /// Handled records, after processing
    pub fn records(&self) -> Vec<LogRecord> {
        self.appender().records().cloned().collect()
    }

    pub fn formatted(&self) -> Vec<String> {
        self.appender().formatted().map(String::from).collect()
    }

    pub fn has_record(&self, level: LogLevel, message: &str) -> bool {
        self.appender()
            .records()
            .any(|record| record.level() == level && record.message() == message)
    }

    pub fn has_records_at(&self, level: LogLevel) -> bool {
        self.appender().records().any(|record| record.level() == level)
    }

    pub fn len(&self) -> usize {
        self.appender().len()
    }

    pub fn is_empty(&self) -> bool {
        self.appender().is_empty()
    }
}
