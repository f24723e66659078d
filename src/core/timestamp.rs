//! Timestamp rendering for formatters

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How formatters render a record's timestamp
///
/// # Examples
///
/// ```
/// use rust_log_pipeline::core::{LoggerError, TimestampFormat};
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Iso8601.format(&Utc::now())?;
/// assert!(rendered.ends_with('Z'));
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Seconds since the epoch
    Unix,

    /// Milliseconds since the epoch
    UnixMillis,

    /// Microseconds since the epoch
    UnixMicros,

    /// Any strftime-compatible pattern, e.g. `"%d/%b/%Y:%H:%M:%S %z"`
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`
    ///
    /// Fails with [`LoggerError::FormatterError`] when a `Custom` pattern
    /// contains a specifier chrono does not understand.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let rendered = match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                write!(rendered, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("invalid pattern '{}'", format_str),
                    )
                })?;
                rendered
            }
        };
        Ok(rendered)
    }

    /// Render for a JSON document: epoch formats become numbers, the rest strings
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        let value = match self {
            TimestampFormat::Unix => serde_json::Value::Number(datetime.timestamp().into()),
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            TimestampFormat::UnixMicros => {
                serde_json::Value::Number(datetime.timestamp_micros().into())
            }
            _ => serde_json::Value::String(self.format(datetime)?),
        };
        Ok(value)
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }
}
