//! Log record structure

use super::log_context::{escape_control, FieldValue, LogContext};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One log event.
///
/// Fields are read through accessors only. The `with_*` methods consume the
/// record and return a new one, which is how processors transform records
/// without touching the copy other handlers see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    channel: String,
    message: String,
    #[serde(default)]
    context: LogContext,
    #[serde(default)]
    extra: LogContext,
}

impl LogRecord {
    pub fn new(level: LogLevel, channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            channel: channel.into(),
            message: escape_control(&message.into()),
            context: LogContext::new(),
            extra: LogContext::new(),
        }
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    #[inline]
    pub fn extra(&self) -> &LogContext {
        &self.extra
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = escape_control(&message.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_context_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.context.add_field(key, value);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: LogContext) -> Self {
        self.extra = extra;
        self
    }

    #[must_use]
    pub fn with_extra_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.extra.add_field(key, value);
        self
    }
}
