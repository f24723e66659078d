//! Single-line text formatter

use crate::core::{Formatter, LogContext, LogRecord, Result, TimestampFormat};

/// Placeholder template used when none is given
pub const DEFAULT_FORMAT: &str = "[%datetime%] %channel%.%level_name%: %message% %context% %extra%";

/// Renders a record through a `%placeholder%` template
///
/// Supported placeholders: `%datetime%`, `%channel%`, `%level_name%`,
/// `%level%`, `%message%`, `%context%`, `%extra%`. Unknown `%name%` tokens
/// are written as is.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::formatters::LineFormatter;
/// use rust_log_pipeline::core::{Formatter, LogLevel, LogRecord};
///
/// let formatter = LineFormatter::with_template("%level_name% %message%");
/// let record = LogRecord::new(LogLevel::Notice, "app", "ready");
/// assert_eq!(formatter.format(&record).unwrap(), "NOTICE ready");
/// ```
#[derive(Debug, Clone)]
pub struct LineFormatter {
    template: String,
    timestamp_format: TimestampFormat,
    ignore_empty_context_and_extra: bool,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_FORMAT.to_string(),
            timestamp_format: TimestampFormat::default(),
            ignore_empty_context_and_extra: true,
        }
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// When false, empty context and extra render as `[]` instead of vanishing
    #[must_use]
    pub fn with_ignore_empty_context_and_extra(mut self, ignore: bool) -> Self {
        self.ignore_empty_context_and_extra = ignore;
        self
    }

    /// Write the value of placeholder `name`, or return false if it is unknown
    fn render_placeholder(&self, name: &str, record: &LogRecord, output: &mut String) -> Result<bool> {
        match name {
            "datetime" => output.push_str(&self.timestamp_format.format(record.timestamp())?),
            "channel" => output.push_str(record.channel()),
            "level_name" => output.push_str(record.level().to_str()),
            "level" => output.push_str(&record.level().code().to_string()),
            "message" => output.push_str(record.message()),
            "context" => self.render_fields(record.context(), output),
            "extra" => self.render_fields(record.extra(), output),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render_fields(&self, fields: &LogContext, output: &mut String) {
        if !fields.is_empty() {
            output.push_str(&fields.format_fields());
        } else if !self.ignore_empty_context_and_extra {
            output.push_str("[]");
        } else if output.ends_with(' ') {
            // Drop the separator in front of the vanished placeholder
            output.pop();
        }
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        // Single pass over the template: substituted values are never rescanned
        let mut output = String::with_capacity(self.template.len() + record.message().len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('%') {
            output.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            if let Some(end) = after.find('%') {
                if self.render_placeholder(&after[..end], record, &mut output)? {
                    rest = &after[end + 1..];
                    continue;
                }
            }
            output.push('%');
            rest = after;
        }
        output.push_str(rest);

        Ok(output.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::TimeZone;
    use chrono::Utc;

    fn record() -> LogRecord {
        let at = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        LogRecord::new(LogLevel::Warning, "billing", "Payment retried").with_timestamp(at)
    }

    #[test]
    fn test_default_template_without_fields() {
        let line = LineFormatter::new().format(&record()).unwrap();
        assert_eq!(
            line,
            "[2025-01-08T10:30:45.000Z] billing.WARNING: Payment retried"
        );
    }

    #[test]
    fn test_default_template_with_fields() {
        let record = record()
            .with_context_field("attempt", 2)
            .with_extra_field("uid", "f00d");
        let line = LineFormatter::new().format(&record).unwrap();
        assert_eq!(
            line,
            "[2025-01-08T10:30:45.000Z] billing.WARNING: Payment retried attempt=2 uid=f00d"
        );
    }

    #[test]
    fn test_empty_fields_kept_when_not_ignored() {
        let line = LineFormatter::with_template("%message% %context% %extra%")
            .with_ignore_empty_context_and_extra(false)
            .format(&record())
            .unwrap();
        assert_eq!(line, "Payment retried [] []");
    }

    #[test]
    fn test_message_placeholders_are_literal() {
        let record = record().with_message("literal %channel%");
        let line = LineFormatter::with_template("%level% %message%")
            .format(&record)
            .unwrap();
        assert_eq!(line, "300 literal %channel%");
    }

    #[test]
    fn test_substituted_values_are_not_expanded() {
        let record = LogRecord::new(LogLevel::Info, "%level_name%", "done %extra%")
            .with_context_field("note", "%message%");
        let line = LineFormatter::with_template("%channel%|%context%|%message%|%extra%")
            .format(&record)
            .unwrap();
        assert_eq!(line, "%level_name%|note=%message%|done %extra%|");
    }

    #[test]
    fn test_unknown_and_unpaired_percent_signs() {
        let line = LineFormatter::with_template("100% %user% %level_name%")
            .format(&record())
            .unwrap();
        assert_eq!(line, "100% %user% WARNING");
    }

    #[test]
    fn test_batch_keeps_order() {
        let formatter = LineFormatter::with_template("%message%");
        let records = vec![record().with_message("one"), record().with_message("two")];
        assert_eq!(formatter.format_batch(&records).unwrap(), "one\ntwo");
    }
}
