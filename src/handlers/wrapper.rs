//! Decorator that forwards everything to a wrapped handler
//!
//! [`HandlerWrapper`] is the base for handlers that extend or restrict
//! another handler without modifying it. Build a custom decorator by owning a
//! `HandlerWrapper` and overriding only the calls you need:
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//!
//! /// Drops records that mention a password
//! struct Redacting<H: Handler> {
//!     inner: HandlerWrapper<H>,
//! }
//!
//! impl<H: Handler> Handler for Redacting<H> {
//!     fn name(&self) -> &str {
//!         self.inner.name()
//!     }
//!
//!     fn is_handling(&self, record: &LogRecord) -> bool {
//!         self.inner.is_handling(record)
//!     }
//!
//!     fn handle(&self, record: &LogRecord) -> Result<bool> {
//!         if record.message().contains("password") {
//!             return Ok(false);
//!         }
//!         self.inner.handle(record)
//!     }
//!
//!     fn close(&self) -> Result<()> {
//!         self.inner.close()
//!     }
//!
//!     fn as_processable(&self) -> Option<&dyn Processable> {
//!         self.inner.as_processable()
//!     }
//!
//!     fn as_formattable(&self) -> Option<&dyn Formattable> {
//!         self.inner.as_formattable()
//!     }
//! }
//!
//! let handler = Redacting {
//!     inner: HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug)),
//! };
//! handler.handle(&LogRecord::new(LogLevel::Info, "auth", "password=hunter2")).unwrap();
//! handler.handle(&LogRecord::new(LogLevel::Info, "auth", "login ok")).unwrap();
//! assert_eq!(handler.inner.inner().len(), 1);
//! ```

use crate::core::{
    Capability, Formattable, Handler, LogRecord, LoggerError, Processable, Resettable, Result,
    SharedFormatter, SharedProcessor,
};
use std::sync::atomic::{AtomicBool, Ordering};

/// Forwards every call to the handler it owns
///
/// Optional capability calls are forwarded only when the wrapped handler
/// supports the capability; otherwise they fail with
/// [`LoggerError::CapabilityMismatch`]. `reset` is the exception: it is a
/// no-op when the wrapped handler is not resettable.
///
/// After `close`, `handle`, `handle_batch` and the processor/formatter calls
/// fail with [`LoggerError::HandlerClosed`], `is_handling` returns `false`, and
/// further `close` calls do nothing.
pub struct HandlerWrapper<H: Handler = Box<dyn Handler>> {
    handler: H,
    closed: AtomicBool,
}

impl<H: Handler> HandlerWrapper<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            closed: AtomicBool::new(false),
        }
    }

    pub fn inner(&self) -> &H {
        &self.handler
    }

    pub fn into_inner(self) -> H {
        self.handler
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Push a processor and return the wrapper for further chaining
    ///
    /// ```
    /// use rust_log_pipeline::prelude::*;
    /// use rust_log_pipeline::processors::{TagProcessor, UidProcessor};
    /// use std::sync::Arc;
    ///
    /// let wrapper = HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug));
    /// wrapper
    ///     .with_processor(Arc::new(UidProcessor::default()))?
    ///     .with_processor(Arc::new(TagProcessor::new(["api"])))?;
    /// assert_eq!(wrapper.inner().processor_count(), 2);
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn with_processor(&self, processor: SharedProcessor) -> Result<&Self> {
        self.push_processor(processor)?;
        Ok(self)
    }

    /// Set the wrapped handler's formatter and return the wrapper
    pub fn with_formatter(&self, formatter: SharedFormatter) -> Result<&Self> {
        self.set_formatter(formatter)?;
        Ok(self)
    }

    /// Fail with [`LoggerError::HandlerClosed`] once the wrapper is closed
    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(LoggerError::handler_closed(self.handler.name()));
        }
        Ok(())
    }

    fn processable(&self) -> Result<&dyn Processable> {
        self.ensure_open()?;
        self.handler
            .as_processable()
            .ok_or_else(|| LoggerError::capability_mismatch(Capability::Processable))
    }

    fn formattable(&self) -> Result<&dyn Formattable> {
        self.ensure_open()?;
        self.handler
            .as_formattable()
            .ok_or_else(|| LoggerError::capability_mismatch(Capability::Formattable))
    }
}

impl<H: Handler> Handler for HandlerWrapper<H> {
    fn name(&self) -> &str {
        self.handler.name()
    }

    fn is_handling(&self, record: &LogRecord) -> bool {
        !self.is_closed() && self.handler.is_handling(record)
    }

    fn handle(&self, record: &LogRecord) -> Result<bool> {
        self.ensure_open()?;
        self.handler.handle(record)
    }

    fn handle_batch(&self, records: &[LogRecord]) -> Result<()> {
        self.ensure_open()?;
        self.handler.handle_batch(records)
    }

    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.handler.close()
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

impl<H: Handler> Processable for HandlerWrapper<H> {
    fn push_processor(&self, processor: SharedProcessor) -> Result<()> {
        self.processable()?.push_processor(processor)
    }

    fn pop_processor(&self) -> Result<SharedProcessor> {
        self.processable()?.pop_processor()
    }
}

impl<H: Handler> Formattable for HandlerWrapper<H> {
    fn set_formatter(&self, formatter: SharedFormatter) -> Result<()> {
        self.formattable()?.set_formatter(formatter)
    }

    fn formatter(&self) -> Result<SharedFormatter> {
        self.formattable()?.formatter()
    }
}

impl<H: Handler> Resettable for HandlerWrapper<H> {
    fn reset(&self) {
        if let Some(resettable) = self.handler.as_resettable() {
            resettable.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Processor};
    use crate::formatters::{JsonFormatter, LineFormatter};
    use crate::handlers::{NullHandler, TestHandler};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn record(level: LogLevel, message: &str) -> LogRecord {
        LogRecord::new(level, "wrapped", message)
    }

    fn noop() -> SharedProcessor {
        Arc::new(|record: LogRecord| record)
    }

    #[test]
    fn test_push_processor_without_capability() {
        let wrapper = HandlerWrapper::new(NullHandler::new(LogLevel::Debug));

        let err = wrapper.push_processor(noop()).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::CapabilityMismatch {
                capability: Capability::Processable
            }
        ));
        assert_eq!(err.to_string(), "wrapped handler does not implement Processable");
        assert!(matches!(
            wrapper.pop_processor(),
            Err(LoggerError::CapabilityMismatch { .. })
        ));
    }

    #[test]
    fn test_processor_push_pop_forwards() {
        let wrapper = HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug));
        let processor = noop();

        wrapper.push_processor(Arc::clone(&processor)).unwrap();
        assert_eq!(wrapper.inner().processor_count(), 1);

        let popped = wrapper.pop_processor().unwrap();
        assert!(Arc::ptr_eq(&popped, &processor));
        assert_eq!(wrapper.inner().processor_count(), 0);
    }

    #[test]
    fn test_forwarded_processor_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting: SharedProcessor = Arc::new(move |record: LogRecord| {
            counter.fetch_add(1, Ordering::SeqCst);
            record
        });

        let wrapper = HandlerWrapper::new(HandlerWrapper::new(TestHandler::capturing(
            LogLevel::Debug,
        )));
        wrapper.push_processor(counting).unwrap();
        wrapper.handle(&record(LogLevel::Info, "once")).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_formatter_returns_on_success() {
        let wrapper = HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug));
        let formatter: SharedFormatter = Arc::new(JsonFormatter::new());

        wrapper.set_formatter(Arc::clone(&formatter)).unwrap();
        assert!(Arc::ptr_eq(&wrapper.formatter().unwrap(), &formatter));
    }

    #[test]
    fn test_formatter_visible_through_fresh_wrapper() {
        let shared = Arc::new(TestHandler::capturing(LogLevel::Debug));
        let formatter: SharedFormatter = Arc::new(LineFormatter::with_template("%message%"));

        HandlerWrapper::new(Arc::clone(&shared))
            .set_formatter(Arc::clone(&formatter))
            .unwrap();

        let fresh = HandlerWrapper::new(Arc::clone(&shared));
        assert!(Arc::ptr_eq(&fresh.formatter().unwrap(), &formatter));
    }

    #[test]
    fn test_formatter_without_capability() {
        let wrapper = HandlerWrapper::new(NullHandler::default());
        assert!(wrapper
            .set_formatter(Arc::new(JsonFormatter::new()))
            .unwrap_err()
            .is_capability_mismatch());
        assert!(matches!(
            wrapper.formatter(),
            Err(LoggerError::CapabilityMismatch {
                capability: Capability::Formattable
            })
        ));
    }

    #[test]
    fn test_chaining_stays_on_wrapper() {
        let wrapper = HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug));
        let chained = wrapper
            .with_processor(noop())
            .and_then(|w| w.with_formatter(Arc::new(LineFormatter::new())))
            .unwrap();

        assert!(std::ptr::eq(chained, &wrapper));
        assert_eq!(wrapper.inner().processor_count(), 1);
    }

    #[test]
    fn test_reset_without_capability_is_noop() {
        let wrapper = HandlerWrapper::new(NullHandler::default());
        wrapper.reset();
        assert!(wrapper.handle(&record(LogLevel::Error, "still works")).unwrap());
    }

    #[test]
    fn test_reset_forwards() {
        let wrapper = HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug));
        wrapper.handle(&record(LogLevel::Info, "before reset")).unwrap();
        wrapper.reset();
        assert!(wrapper.inner().is_empty());
    }

    #[test]
    fn test_close_twice() {
        struct CountingClose(AtomicUsize);

        impl Handler for CountingClose {
            fn name(&self) -> &str {
                "counting-close"
            }
            fn is_handling(&self, _record: &LogRecord) -> bool {
                true
            }
            fn handle(&self, _record: &LogRecord) -> Result<bool> {
                Ok(false)
            }
            fn close(&self) -> Result<()> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        let wrapper = HandlerWrapper::new(CountingClose(AtomicUsize::new(0)));
        wrapper.close().unwrap();
        wrapper.close().unwrap();
        assert_eq!(wrapper.inner().0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_calls_after_close() {
        let wrapper = HandlerWrapper::new(TestHandler::capturing(LogLevel::Debug));
        wrapper.close().unwrap();

        assert!(!wrapper.is_handling(&record(LogLevel::Error, "late")));
        assert!(matches!(
            wrapper.handle(&record(LogLevel::Error, "late")),
            Err(LoggerError::HandlerClosed { .. })
        ));
        assert!(matches!(
            wrapper.push_processor(noop()),
            Err(LoggerError::HandlerClosed { .. })
        ));
        wrapper.reset();
    }

    #[test]
    fn test_nested_wrappers_handle_once() {
        let wrapper = HandlerWrapper::new(HandlerWrapper::new(TestHandler::capturing(
            LogLevel::Debug,
        )));
        let input = record(LogLevel::Info, "exactly once");

        assert!(!wrapper.handle(&input).unwrap());

        let captured = wrapper.inner().inner().records();
        assert_eq!(captured, vec![input]);
    }

    #[test]
    fn test_boxed_default_parameter() {
        let boxed: Box<dyn Handler> = Box::new(TestHandler::capturing(LogLevel::Debug));
        let wrapper: HandlerWrapper = HandlerWrapper::new(boxed);
        assert_eq!(wrapper.name(), "memory");
        assert!(wrapper.push_processor(noop()).is_ok());

        let processor = wrapper.pop_processor().unwrap();
        let out = processor.process(record(LogLevel::Info, "identity"));
        assert_eq!(out.message(), "identity");
    }
}
