//! Logger: ordered handler stack and the dispatch loop

use super::{
    error::{LoggerError, Result},
    handler::Handler,
    log_context::LogContext,
    log_level::LogLevel,
    log_record::LogRecord,
    processor::{ProcessorStack, SharedProcessor},
};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Receives the failing handler's name and the error it produced
pub type HandlerErrorCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

/// A named channel dispatching records to a stack of handlers
///
/// Handlers are kept in bubbling order: the most recently pushed handler sees
/// a record first. A handler returning `Ok(true)` from `handle` stops the
/// record from reaching the handlers after it.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
/// use std::sync::Arc;
///
/// let capture = Arc::new(TestHandler::capturing(LogLevel::Info));
/// let logger = Logger::builder("app")
///     .shared_handler(capture.clone())
///     .build();
///
/// logger.warning("disk almost full");
/// logger.debug("below every threshold");
///
/// assert!(capture.has_record(LogLevel::Warning, "disk almost full"));
/// assert_eq!(capture.len(), 1);
/// ```
pub struct Logger {
    name: String,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
    processors: ProcessorStack,
    on_handler_error: Option<HandlerErrorCallback>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: RwLock::new(Vec::new()),
            processors: ProcessorStack::new(),
            on_handler_error: None,
        }
    }

    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of this logger under another channel name
    ///
    /// The copy shares the handler instances and starts with the same
    /// processors; later pushes and pops on either logger are independent.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: RwLock::new(self.handlers.read().clone()),
            processors: self.processors.clone(),
            on_handler_error: self.on_handler_error.clone(),
        }
    }

    /// Put a handler at the front of the bubbling order
    pub fn push_handler(&self, handler: Arc<dyn Handler>) {
        self.handlers.write().insert(0, handler);
    }

    pub fn pop_handler(&self) -> Result<Arc<dyn Handler>> {
        let mut handlers = self.handlers.write();
        if handlers.is_empty() {
            return Err(LoggerError::empty_stack("handler"));
        }
        Ok(handlers.remove(0))
    }

    /// Replace all handlers; `handlers` is given in bubbling order
    pub fn set_handlers(&self, handlers: Vec<Arc<dyn Handler>>) {
        *self.handlers.write() = handlers;
    }

    /// Snapshot of the handlers in bubbling order
    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers.read().clone()
    }

    pub fn push_processor(&self, processor: SharedProcessor) {
        self.processors.push(processor);
    }

    pub fn pop_processor(&self) -> Result<SharedProcessor> {
        self.processors.pop()
    }

    /// Whether any handler would accept a record at `level`
    pub fn is_handling(&self, level: LogLevel) -> bool {
        let probe = LogRecord::new(level, self.name.as_str(), "");
        self.handlers.read().iter().any(|h| h.is_handling(&probe))
    }

    /// Dispatch a record through the handler stack
    ///
    /// Returns `false` when no handler accepts the record. Failures of a
    /// single handler are reported and never stop the others.
    pub fn log_record(&self, record: LogRecord) -> bool {
        // Dispatch on a snapshot so handlers may log through this logger
        let handlers = self.handlers();

        let Some(start) = handlers.iter().position(|h| h.is_handling(&record)) else {
            return false;
        };

        let record = self.processors.apply(record);

        for handler in &handlers[start..] {
            if !handler.is_handling(&record) {
                continue;
            }

            let result = catch_unwind(AssertUnwindSafe(|| handler.handle(&record)));
            match result {
                Ok(Ok(true)) => break,
                Ok(Ok(false)) => {}
                Ok(Err(e)) => self.report(handler.name(), &e),
                Err(panic_info) => {
                    let error =
                        LoggerError::handler_panicked(handler.name(), panic_message(&*panic_info));
                    self.report(handler.name(), &error);
                }
            }
        }

        true
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> bool {
        self.log_record(LogRecord::new(level, self.name.as_str(), message))
    }

    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) -> bool {
        self.log_record(LogRecord::new(level, self.name.as_str(), message).with_context(context))
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Notice, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Warning, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Critical, message)
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Alert, message)
    }

    #[inline]
    pub fn emergency(&self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Emergency, message)
    }

    /// Close every handler, reporting the ones that fail
    pub fn close(&self) {
        for handler in self.handlers() {
            let result = catch_unwind(AssertUnwindSafe(|| handler.close()));
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => self.report(handler.name(), &e),
                Err(panic_info) => {
                    let error =
                        LoggerError::handler_panicked(handler.name(), panic_message(&*panic_info));
                    self.report(handler.name(), &error);
                }
            }
        }
    }

    /// Reset resettable handlers and the logger's processors
    pub fn reset(&self) {
        for handler in self.handlers() {
            if let Some(resettable) = handler.as_resettable() {
                resettable.reset();
            }
        }
        self.processors.reset();
    }

    fn report(&self, handler: &str, error: &LoggerError) {
        match &self.on_handler_error {
            Some(callback) => callback(handler, error),
            None => eprintln!(
                "[LOGGER ERROR] Handler '{}' on channel '{}' failed: {}",
                handler, self.name, error
            ),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<String> = self
            .handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("handlers", &handlers)
            .field("processors", &self.processors.len())
            .finish()
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for [`Logger`]
///
/// Handlers are pushed in call order, so the last one added bubbles first.
pub struct LoggerBuilder {
    name: String,
    handlers: Vec<Arc<dyn Handler>>,
    processors: Vec<SharedProcessor>,
    on_handler_error: Option<HandlerErrorCallback>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
            processors: Vec::new(),
            on_handler_error: None,
        }
    }

    #[must_use]
    pub fn handler(self, handler: impl Handler + 'static) -> Self {
        self.shared_handler(Arc::new(handler))
    }

    #[must_use]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use]
    pub fn processor(mut self, processor: SharedProcessor) -> Self {
        self.processors.push(processor);
        self
    }

    #[must_use]
    pub fn on_handler_error(mut self, callback: HandlerErrorCallback) -> Self {
        self.on_handler_error = Some(callback);
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::new(self.name);
        logger.on_handler_error = self.on_handler_error;
        for handler in self.handlers {
            logger.push_handler(handler);
        }
        for processor in self.processors {
            logger.push_processor(processor);
        }
        logger
    }
}
