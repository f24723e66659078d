//! Static tags attached to every record

use crate::core::{FieldValue, LogRecord, Processor};
use parking_lot::RwLock;

/// Adds `extra.tags` with the configured tag list
#[derive(Debug, Default)]
pub struct TagProcessor {
    tags: RwLock<Vec<String>>,
}

impl TagProcessor {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: RwLock::new(tags.into_iter().map(Into::into).collect()),
        }
    }

    pub fn add_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.write().extend(tags.into_iter().map(Into::into));
    }

    pub fn set_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.tags.write() = tags.into_iter().map(Into::into).collect();
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.read().clone()
    }
}

impl Processor for TagProcessor {
    fn process(&self, record: LogRecord) -> LogRecord {
        let tags: Vec<FieldValue> = self
            .tags
            .read()
            .iter()
            .map(|tag| FieldValue::from(tag.as_str()))
            .collect();
        record.with_extra_field("tags", FieldValue::List(tags))
    }
}
