//! Per-run unique id

use crate::core::{LogRecord, LoggerError, Processor, Result};
use parking_lot::RwLock;
use rand::Rng;

/// Adds `extra.uid`, a random hex id shared by every record until `reset`
///
/// Useful to correlate all records emitted while serving one request.
#[derive(Debug)]
pub struct UidProcessor {
    length: usize,
    uid: RwLock<String>,
}

impl UidProcessor {
    pub const DEFAULT_LENGTH: usize = 7;
    pub const MAX_LENGTH: usize = 32;

    pub fn new(length: usize) -> Result<Self> {
        if length == 0 || length > Self::MAX_LENGTH {
            return Err(LoggerError::config(
                "UidProcessor",
                format!("uid length must be between 1 and {}, got {}", Self::MAX_LENGTH, length),
            ));
        }

        Ok(Self {
            length,
            uid: RwLock::new(Self::generate(length)),
        })
    }

    pub fn uid(&self) -> String {
        self.uid.read().clone()
    }

    fn generate(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| {
                let nibble: u32 = rng.gen_range(0..16);
                char::from_digit(nibble, 16).unwrap_or('0')
            })
            .collect()
    }
}

impl Default for UidProcessor {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            uid: RwLock::new(Self::generate(Self::DEFAULT_LENGTH)),
        }
    }
}

impl Processor for UidProcessor {
    fn process(&self, record: LogRecord) -> LogRecord {
        record.with_extra_field("uid", self.uid())
    }

    fn reset(&self) {
        *self.uid.write() = Self::generate(self.length);
    }
}
