//! Level and predicate filtering decorator

use super::wrapper::HandlerWrapper;
use crate::core::{Formattable, Handler, LogLevel, LogRecord, Processable, Resettable, Result};
use parking_lot::RwLock;
use std::sync::Arc;

pub type RecordPredicate = Arc<dyn Fn(&LogRecord) -> bool + Send + Sync>;

/// Forwards only records whose level is accepted and that pass the predicate
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// // Only warnings and errors reach the capture handler
/// let filter = FilterHandler::new(
///     TestHandler::capturing(LogLevel::Debug),
///     LogLevel::Warning,
///     LogLevel::Error,
/// );
///
/// filter.handle(&LogRecord::new(LogLevel::Critical, "app", "too loud")).unwrap();
/// filter.handle(&LogRecord::new(LogLevel::Warning, "app", "just right")).unwrap();
/// assert_eq!(filter.inner().len(), 1);
/// ```
pub struct FilterHandler<H: Handler> {
    inner: HandlerWrapper<H>,
    accepted: RwLock<Vec<LogLevel>>,
    predicate: Option<RecordPredicate>,
    bubble: bool,
}

impl<H: Handler> FilterHandler<H> {
    /// Accept every level in `min..=max`
    pub fn new(handler: H, min: LogLevel, max: LogLevel) -> Self {
        Self::with_accepted_levels(handler, Self::level_range(min, max))
    }

    pub fn with_accepted_levels(handler: H, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        Self {
            inner: HandlerWrapper::new(handler),
            accepted: RwLock::new(levels.into_iter().collect()),
            predicate: None,
            bubble: true,
        }
    }

    /// Additional condition a record must meet; keep it cheap
    #[must_use]
    pub fn with_predicate(mut self, predicate: RecordPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    #[must_use]
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    pub fn set_accepted_levels(&self, min: LogLevel, max: LogLevel) {
        *self.accepted.write() = Self::level_range(min, max);
    }

    pub fn accepted_levels(&self) -> Vec<LogLevel> {
        self.accepted.read().clone()
    }

    pub fn inner(&self) -> &H {
        self.inner.inner()
    }

    fn level_range(min: LogLevel, max: LogLevel) -> Vec<LogLevel> {
        LogLevel::ALL
            .iter()
            .copied()
            .filter(|level| *level >= min && *level <= max)
            .collect()
    }

    fn accepts(&self, record: &LogRecord) -> bool {
        self.accepted.read().contains(&record.level())
            && self.predicate.as_ref().map_or(true, |predicate| predicate(record))
    }
}

impl<H: Handler> Handler for FilterHandler<H> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_handling(&self, record: &LogRecord) -> bool {
        !self.inner.is_closed() && self.accepts(record)
    }

    fn handle(&self, record: &LogRecord) -> Result<bool> {
        self.inner.ensure_open()?;
        if !self.is_handling(record) {
            return Ok(false);
        }
        self.inner.handle(record)?;
        Ok(!self.bubble)
    }

    fn handle_batch(&self, records: &[LogRecord]) -> Result<()> {
        self.inner.ensure_open()?;
        let accepted: Vec<LogRecord> = records
            .iter()
            .filter(|record| self.accepts(record))
            .cloned()
            .collect();
        if accepted.is_empty() {
            return Ok(());
        }
        self.inner.handle_batch(&accepted)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::handlers::{NullHandler, TestHandler};

    fn record(level: LogLevel, message: &str) -> LogRecord {
        LogRecord::new(level, "filter", message)
    }

    #[test]
    fn test_explicit_level_list() {
        let filter = FilterHandler::with_accepted_levels(
            TestHandler::capturing(LogLevel::Debug),
            [LogLevel::Debug, LogLevel::Alert],
        );

        assert!(filter.is_handling(&record(LogLevel::Alert, "a")));
        assert!(!filter.is_handling(&record(LogLevel::Error, "b")));
    }

    #[test]
    fn test_predicate() {
        let filter = FilterHandler::new(
            TestHandler::capturing(LogLevel::Debug),
            LogLevel::Debug,
            LogLevel::Emergency,
        )
        .with_predicate(Arc::new(|record: &LogRecord| record.channel() == "filter"));

        filter.handle(&record(LogLevel::Info, "kept")).unwrap();
        filter
            .handle(&LogRecord::new(LogLevel::Info, "other", "dropped"))
            .unwrap();

        assert_eq!(filter.inner().len(), 1);
    }

    #[test]
    fn test_bubble_off_stops_propagation() {
        let filter = FilterHandler::new(
            TestHandler::capturing(LogLevel::Debug),
            LogLevel::Info,
            LogLevel::Info,
        )
        .with_bubble(false);

        assert!(filter.handle(&record(LogLevel::Info, "mine")).unwrap());
        assert!(!filter.handle(&record(LogLevel::Error, "not mine")).unwrap());
    }

    #[test]
    fn test_batch_forwards_accepted_in_order() {
        let filter = FilterHandler::new(
            TestHandler::capturing(LogLevel::Debug),
            LogLevel::Warning,
            LogLevel::Emergency,
        );
        let records = vec![
            record(LogLevel::Error, "1"),
            record(LogLevel::Debug, "skip"),
            record(LogLevel::Warning, "2"),
            record(LogLevel::Critical, "3"),
        ];

        filter.handle_batch(&records).unwrap();

        let messages: Vec<String> = filter
            .inner()
            .records()
            .iter()
            .map(|r| r.message().to_string())
            .collect();
        assert_eq!(messages, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_set_accepted_levels() {
        let filter = FilterHandler::new(NullHandler::default(), LogLevel::Debug, LogLevel::Info);
        filter.set_accepted_levels(LogLevel::Error, LogLevel::Critical);
        assert_eq!(
            filter.accepted_levels(),
            vec![LogLevel::Error, LogLevel::Critical]
        );
    }

    #[test]
    fn test_capabilities_forward_or_mismatch() {
        let filter = FilterHandler::new(NullHandler::default(), LogLevel::Debug, LogLevel::Info);
        let processable = filter.as_processable().unwrap();
        assert!(matches!(
            processable.push_processor(Arc::new(|r: LogRecord| r)),
            Err(LoggerError::CapabilityMismatch { .. })
        ));
    }

    #[test]
    fn test_closed_filter_rejects_records() {
        let filter = FilterHandler::new(
            TestHandler::capturing(LogLevel::Debug),
            LogLevel::Warning,
            LogLevel::Emergency,
        );
        filter.close().unwrap();

        assert!(matches!(
            filter.handle(&record(LogLevel::Debug, "outside range")),
            Err(LoggerError::HandlerClosed { .. })
        ));
        assert!(matches!(
            filter.handle_batch(&[record(LogLevel::Debug, "outside range")]),
            Err(LoggerError::HandlerClosed { .. })
        ));
        assert!(filter.inner().is_empty());
    }
}
