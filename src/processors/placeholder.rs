//! `{key}` interpolation of context values into the message

use crate::core::{LogRecord, Processor};

/// Replaces `{key}` in the message with the context value stored under `key`
///
/// # Example
///
/// ```
/// use rust_log_pipeline::core::{LogLevel, LogRecord, Processor};
/// use rust_log_pipeline::processors::PlaceholderProcessor;
///
/// let record = LogRecord::new(LogLevel::Info, "app", "User {user} logged in")
///     .with_context_field("user", "alice");
/// let record = PlaceholderProcessor::new().process(record);
/// assert_eq!(record.message(), "User alice logged in");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlaceholderProcessor {
    remove_used_context_fields: bool,
}

impl PlaceholderProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop context fields once they have been interpolated
    #[must_use]
    pub fn with_remove_used_context_fields(mut self, remove: bool) -> Self {
        self.remove_used_context_fields = remove;
        self
    }
}

impl Processor for PlaceholderProcessor {
    fn process(&self, record: LogRecord) -> LogRecord {
        if !record.message().contains('{') {
            return record;
        }

        let mut message = record.message().to_string();
        let mut context = record.context().clone();
        let mut used = Vec::new();

        for (key, value) in record.context().fields() {
            let placeholder = format!("{{{}}}", key);
            if message.contains(&placeholder) {
                message = message.replace(&placeholder, &value.to_string());
                used.push(key.clone());
            }
        }

        if used.is_empty() {
            return record;
        }
        if self.remove_used_context_fields {
            for key in &used {
                context.remove(key);
            }
        }

        record.with_message(message).with_context(context)
    }
}
