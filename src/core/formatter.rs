//! Formatter trait

use super::error::Result;
use super::log_record::LogRecord;
use std::sync::Arc;

/// Converts records into their output representation
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String>;

    /// Format several records as one unit, preserving their order
    fn format_batch(&self, records: &[LogRecord]) -> Result<String> {
        let lines = records
            .iter()
            .map(|record| self.format(record))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

pub type SharedFormatter = Arc<dyn Formatter>;
