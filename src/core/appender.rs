//! Appender trait for raw output destinations

use super::{error::Result, log_record::LogRecord};

/// Sink a processing handler writes already-formatted output to
pub trait Appender: Send {
    fn append(&mut self, record: &LogRecord, formatted: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Write the output of one `format_batch` call covering `records`
    ///
    /// The default appends it once, attributed to the most severe record.
    fn append_batch(&mut self, records: &[LogRecord], formatted: &str) -> Result<()> {
        match records.iter().max_by_key(|record| record.level()) {
            Some(record) => self.append(record, formatted),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn reset(&mut self) {}
}
