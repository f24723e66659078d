//! In-memory appender that keeps everything it receives

use crate::core::{Appender, LogRecord, Result};

/// Captures records and their formatted output, mainly for tests
///
/// A batch adds every record but only one formatted entry.
#[derive(Debug, Default)]
pub struct MemoryAppender {
    records: Vec<LogRecord>,
    formatted: Vec<String>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    pub fn formatted(&self) -> impl Iterator<Item = &str> {
        self.formatted.iter().map(String::as_str)
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, record: &LogRecord, formatted: &str) -> Result<()> {
        self.records.push(record.clone());
        self.formatted.push(formatted.to_string());
        Ok(())
    }

    fn append_batch(&mut self, records: &[LogRecord], formatted: &str) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        self.records.extend_from_slice(records);
        self.formatted.push(formatted.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn reset(&mut self) {
        self.records.clear();
        self.formatted.clear();
    }
}
