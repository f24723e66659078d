//! Handler that discards records

use crate::core::{Handler, LogLevel, LogRecord, Result};

/// Swallows every record at or above its level
///
/// Handled records never bubble further. It supports none of the optional
/// capabilities, so it has no processors or formatter.
#[derive(Debug, Clone, Copy)]
pub struct NullHandler {
    level: LogLevel,
}

impl NullHandler {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Default for NullHandler {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Handler for NullHandler {
    fn name(&self) -> &str {
        "null"
    }

    fn is_handling(&self, record: &LogRecord) -> bool {
        record.level() >= self.level
    }

    fn handle(&self, record: &LogRecord) -> Result<bool> {
        Ok(self.is_handling(record))
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
