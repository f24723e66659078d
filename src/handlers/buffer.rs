//! Buffering decorator
//!
//! Holds handled records in memory and hands them to the wrapped handler as
//! one batch when flushed. The buffer is flushed on [`BufferHandler::flush`],
//! on `close`, on `reset` and when the handler is dropped.

use super::wrapper::HandlerWrapper;
use crate::core::{
    Formattable, Handler, LogLevel, LogRecord, LoggerError, Processable, Resettable, Result,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

/// Buffers records and forwards them in one `handle_batch` call
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// let buffer = BufferHandler::new(TestHandler::capturing(LogLevel::Debug), LogLevel::Info);
/// buffer.handle(&LogRecord::new(LogLevel::Info, "app", "held back")).unwrap();
/// assert!(buffer.inner().is_empty());
///
/// buffer.flush().unwrap();
/// assert_eq!(buffer.inner().len(), 1);
/// ```
pub struct BufferHandler<H: Handler> {
    inner: HandlerWrapper<H>,
    level: LogLevel,
    bubble: bool,
    buffer_limit: usize,
    flush_on_overflow: bool,
    buffer: Mutex<VecDeque<LogRecord>>,
    closed: AtomicBool,
}

impl<H: Handler> BufferHandler<H> {
    pub fn new(handler: H, level: LogLevel) -> Self {
        Self {
            inner: HandlerWrapper::new(handler),
            level,
            bubble: true,
            buffer_limit: 0,
            flush_on_overflow: false,
            buffer: Mutex::new(VecDeque::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Maximum number of buffered records, 0 for no limit
    #[must_use]
    pub fn with_buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = limit;
        self
    }

    /// Flush a full buffer instead of dropping its oldest record
    #[must_use]
    pub fn with_flush_on_overflow(mut self, flush: bool) -> Self {
        self.flush_on_overflow = flush;
        self
    }

    #[must_use]
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    pub fn inner(&self) -> &H {
        self.inner.inner()
    }

    pub fn buffered(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Forward every buffered record to the wrapped handler
    pub fn flush(&self) -> Result<()> {
        let records: Vec<LogRecord> = self.buffer.lock().drain(..).collect();
        if records.is_empty() {
            return Ok(());
        }
        self.inner.handle_batch(&records)
    }

    fn make_room(&self) -> Result<()> {
        if self.buffer_limit == 0 {
            return Ok(());
        }

        let mut buffer = self.buffer.lock();
        if buffer.len() < self.buffer_limit {
            return Ok(());
        }

        if self.flush_on_overflow {
            let records: Vec<LogRecord> = buffer.drain(..).collect();
            drop(buffer);
            self.inner.handle_batch(&records)
        } else {
            buffer.pop_front();
            Ok(())
        }
    }
}

impl<H: Handler> Handler for BufferHandler<H> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_handling(&self, record: &LogRecord) -> bool {
        !self.is_closed() && record.level() >= self.level
    }

    fn handle(&self, record: &LogRecord) -> Result<bool> {
        if self.is_closed() {
            return Err(LoggerError::handler_closed(self.name()));
        }
        if record.level() < self.level {
            return Ok(false);
        }

        self.make_room()?;
        self.buffer.lock().push_back(record.clone());

        Ok(!self.bubble)
    }

    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let flushed = self.flush();
        let closed = self.inner.close();
        flushed.and(closed)
    }

    fn as_processable(&self) -> Option<&dyn Processable> {
        Some(&self.inner)
    }

    fn as_formattable(&self) -> Option<&dyn Formattable> {
        Some(&self.inner)
    }

    fn as_resettable(&self) -> Option<&dyn Resettable> {
        Some(self)
    }
}

impl<H: Handler> Resettable for BufferHandler<H> {
    fn reset(&self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush buffer on reset: {}", e);
        }
        self.inner.reset();
    }
}

impl<H: Handler> Drop for BufferHandler<H> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close buffer handler: {}", e);
        }
    }
}
