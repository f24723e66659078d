//! JSON formatter for structured logging

use crate::core::{Formatter, LogRecord, Result, TimestampFormat};

/// How a batch of records is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchMode {
    /// One JSON object per line (JSONL)
    #[default]
    Newlines,
    /// A single JSON array
    Array,
}

/// Writes each record as a JSON object
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    batch_mode: BatchMode,
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_batch_mode(mut self, mode: BatchMode) -> Self {
        self.batch_mode = mode;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn to_value(&self, record: &LogRecord) -> Result<serde_json::Value> {
        let mut json_obj = serde_json::Map::new();
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message().to_string()),
        );
        json_obj.insert("context".to_string(), record.context().to_json_value());
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::Number(record.level().code().into()),
        );
        json_obj.insert(
            "level_name".to_string(),
            serde_json::Value::String(record.level().to_str().to_string()),
        );
        json_obj.insert(
            "channel".to_string(),
            serde_json::Value::String(record.channel().to_string()),
        );
        json_obj.insert(
            "datetime".to_string(),
            self.timestamp_format.to_json_value(record.timestamp())?,
        );
        json_obj.insert("extra".to_string(), record.extra().to_json_value());
        Ok(serde_json::Value::Object(json_obj))
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value(record)?)?)
    }

    fn format_batch(&self, records: &[LogRecord]) -> Result<String> {
        match self.batch_mode {
            BatchMode::Newlines => {
                let lines = records
                    .iter()
                    .map(|record| self.format(record))
                    .collect::<Result<Vec<_>>>()?;
                Ok(lines.join("\n"))
            }
            BatchMode::Array => {
                let values = records
                    .iter()
                    .map(|record| self.to_value(record))
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::to_string(&serde_json::Value::Array(values))?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    #[test]
    fn test_json_format() {
        let record = LogRecord::new(LogLevel::Error, "api", "Error occurred");
        let result = JsonFormatter::new().format(&record).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], 400);
        assert_eq!(parsed["level_name"], "ERROR");
        assert_eq!(parsed["channel"], "api");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["datetime"].is_string());
        assert!(parsed["context"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_json_format_with_fields() {
        let context = LogContext::new()
            .with_field("request_id", "abc-123")
            .with_field("latency_ms", 42);
        let record = LogRecord::new(LogLevel::Info, "api", "Request completed")
            .with_context(context)
            .with_extra_field("uid", "7f3a");

        let result = JsonFormatter::new()
            .with_timestamp_format(TimestampFormat::UnixMillis)
            .format(&record)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["context"]["request_id"], "abc-123");
        assert_eq!(parsed["context"]["latency_ms"], 42);
        assert_eq!(parsed["extra"]["uid"], "7f3a");
        assert!(parsed["datetime"].is_number());
    }

    #[test]
    fn test_batch_modes() {
        let records = vec![
            LogRecord::new(LogLevel::Debug, "app", "first"),
            LogRecord::new(LogLevel::Debug, "app", "second"),
        ];

        let lines = JsonFormatter::new().format_batch(&records).unwrap();
        assert_eq!(lines.lines().count(), 2);

        let array = JsonFormatter::new()
            .with_batch_mode(BatchMode::Array)
            .format_batch(&records)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&array).unwrap();
        assert_eq!(parsed[0]["message"], "first");
        assert_eq!(parsed[1]["message"], "second");
    }

    #[test]
    fn test_bad_timestamp_pattern_fails_batch() {
        let formatter = JsonFormatter::new()
            .with_batch_mode(BatchMode::Array)
            .with_timestamp_format(TimestampFormat::Custom("%Q".to_string()));
        let records = vec![LogRecord::new(LogLevel::Info, "api", "one")];

        assert!(matches!(
            formatter.format_batch(&records),
            Err(crate::core::LoggerError::FormatterError { .. })
        ));
    }
}
