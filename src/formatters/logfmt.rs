//! Logfmt formatter (key=value pairs)

use crate::core::log_context::escape_control;
use crate::core::{FieldValue, Formatter, LogRecord, Result, TimestampFormat};

/// Example: `ts=2025-01-08T10:30:45.000Z level=INFO channel=app msg="Request processed"`
///
/// Context keys are written with a `ctx_` prefix and extra keys with `extra_`.
#[derive(Debug, Clone, Default)]
pub struct LogfmtFormatter {
    timestamp_format: TimestampFormat,
}

impl LogfmtFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn format_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::String(s) => self.escape_value(s),
            FieldValue::List(_) => self.quote_value(&value.to_string()),
            other => other.to_string(),
        }
    }

    /// Escape a logfmt key (remove spaces and special chars)
    fn escape_key(&self, key: &str) -> String {
        key.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
            .collect()
    }

    /// Escape a logfmt value (quote if it contains whitespace, quotes or `=`)
    fn escape_value(&self, value: &str) -> String {
        if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"' || c == '=') {
            self.quote_value(value)
        } else {
            value.to_string()
        }
    }

    fn quote_value(&self, value: &str) -> String {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escape_control(&escaped))
    }
}

impl Formatter for LogfmtFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut parts = vec![
            format!(
                "ts={}",
                self.escape_value(&self.timestamp_format.format(record.timestamp())?)
            ),
            format!("level={}", record.level().to_str()),
            format!("channel={}", self.escape_value(record.channel())),
            // Message is always quoted
            format!("msg={}", self.quote_value(record.message())),
        ];

        for (prefix, fields) in [("ctx_", record.context()), ("extra_", record.extra())] {
            for (key, value) in fields.fields() {
                parts.push(format!(
                    "{}{}={}",
                    prefix,
                    self.escape_key(key),
                    self.format_value(value)
                ));
            }
        }

        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    #[test]
    fn test_logfmt_format() {
        let record = LogRecord::new(LogLevel::Warning, "app", "Warning message");
        let result = LogfmtFormatter::new().format(&record).unwrap();

        assert!(result.starts_with("ts="));
        assert!(result.contains("level=WARNING"));
        assert!(result.contains("channel=app"));
        assert!(result.contains("msg=\"Warning message\""));
    }

    #[test]
    fn test_logfmt_fields() {
        let context = LogContext::new()
            .with_field("user", "alice")
            .with_field("query", "SELECT * FROM users WHERE id=1");
        let record = LogRecord::new(LogLevel::Debug, "db", "Query executed")
            .with_context(context)
            .with_extra_field("count", 5);

        let result = LogfmtFormatter::new().format(&record).unwrap();

        assert!(result.contains("ctx_user=alice"));
        assert!(result.contains("ctx_query=\"SELECT * FROM users WHERE id=1\""));
        assert!(result.ends_with("extra_count=5"));
    }

    #[test]
    fn test_logfmt_escapes_quotes() {
        let record = LogRecord::new(LogLevel::Info, "app", "say \"hi\"");
        let result = LogfmtFormatter::new().format(&record).unwrap();
        assert!(result.contains(r#"msg="say \"hi\"""#));
    }

    #[test]
    fn test_logfmt_escapes_line_breaks_in_fields() {
        let record = LogRecord::new(LogLevel::Info, "app", "login")
            .with_context_field("user", "bob\nlevel=ERROR msg=\"forged\"")
            .with_extra_field("tags", vec!["a\tb"]);
        let result = LogfmtFormatter::new().format(&record).unwrap();

        assert!(!result.contains('\n'));
        assert!(!result.contains('\t'));
        assert!(result.contains(r#"ctx_user="bob\nlevel=ERROR msg=\"forged\"""#));
        assert!(result.contains(r#"extra_tags="[a\tb]""#));
    }
}
