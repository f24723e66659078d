//! Random sampling decorator for high-volume channels
//!
//! Forwards a configurable fraction of records to the wrapped handler. Levels
//! listed in `always_sample` bypass sampling so errors are never lost.

use super::wrapper::HandlerWrapper;
use crate::core::{Formattable, Handler, LogLevel, LogRecord, Processable, Resettable, Result};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Forwards each record with probability `rate`
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// // Drop everything except the always-sampled levels
/// let sampler = SamplingHandler::new(TestHandler::capturing(LogLevel::Debug), 0.0);
///
/// sampler.handle(&LogRecord::new(LogLevel::Info, "app", "noise")).unwrap();
/// sampler.handle(&LogRecord::new(LogLevel::Error, "app", "signal")).unwrap();
/// assert_eq!(sampler.inner().len(), 1);
/// ```
pub struct SamplingHandler<H: Handler> {
    inner: HandlerWrapper<H>,
    rate: f64,
    always_sample: Vec<LogLevel>,
    sampled: AtomicU64,
    dropped: AtomicU64,
}

impl<H: Handler> SamplingHandler<H> {
    /// `rate` is clamped to `0.0..=1.0`
    pub fn new(handler: H, rate: f64) -> Self {
        Self {
            inner: HandlerWrapper::new(handler),
            rate: rate.clamp(0.0, 1.0),
            always_sample: vec![
                LogLevel::Error,
                LogLevel::Critical,
                LogLevel::Alert,
                LogLevel::Emergency,
            ],
            sampled: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn with_always_sample(mut self, levels: Vec<LogLevel>) -> Self {
        self.always_sample = levels;
        self
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn inner(&self) -> &H {
        self.inner.inner()
    }

    /// Records forwarded to the wrapped handler
    pub fn sampled_count(&self) -> u64 {
        self.sampled.load(Ordering::Relaxed)
    }

    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn should_sample(&self, record: &LogRecord) -> bool {
        if self.always_sample.contains(&record.level()) || self.rate >= 1.0 {
            return true;
        }
        if self.rate <= 0.0 {
            return false;
        }
        rand::thread_rng().gen::<f64>() < self.rate
    }
}

impl<H: Handler> Handler for SamplingHandler<H> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_handling(&self, record: &LogRecord) -> bool {
        self.inner.is_handling(record)
    }

    fn handle(&self, record: &LogRecord) -> Result<bool> {
        self.inner.ensure_open()?;
        if !self.should_sample(record) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return Ok(false);
        }
        self.sampled.fetch_add(1, Ordering::Relaxed);
        self.inner.handle(record)
    }

    fn handle_batch(&self, records: &[LogRecord]) -> Result<()> {
        self.inner.ensure_open()?;
        let kept: Vec<LogRecord> = records
            .iter()
            .filter(|record| {
                let keep = self.should_sample(record);
                let counter = if keep { &self.sampled } else { &self.dropped };
                counter.fetch_add(1, Ordering::Relaxed);
                keep
            })
            .cloned()
            .collect();
        if kept.is_empty() {
            return Ok(());
        }
        self.inner.handle_batch(&kept)
    }

    fn close(&self) -> Result<()> {
        self.inner.close()
    }

    fn as_processable(&self) -> Option<&dyn Processable> {
        Some(&self.inner)
    }

    fn as_formattable(&self) -> Option<&dyn Formattable> {
        Some(&self.inner)
    }

    fn as_resettable(&self) -> Option<&dyn Resettable> {
        Some(&self.inner)
    }
}
