//! Handler trait and its optional capabilities
//!
//! Every handler implements [`Handler`]. The optional capabilities
//! ([`Processable`], [`Formattable`], [`Resettable`]) are separate traits; a
//! handler advertises the ones it supports through the `as_*` queries on
//! [`Handler`], which return `None` by default.
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//!
//! let handler = NullHandler::new(LogLevel::Debug);
//! assert!(handler.as_processable().is_none());
//!
//! let handler = TestHandler::capturing(LogLevel::Debug);
//! assert!(handler.as_formattable().is_some());
//! ```

use super::error::Result;
use super::formatter::SharedFormatter;
use super::log_record::LogRecord;
use super::processor::SharedProcessor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Optional handler capability, named in capability mismatch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Processable,
    Formattable,
    Resettable,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Processable => "Processable",
            Capability::Formattable => "Formattable",
            Capability::Resettable => "Resettable",
        };
        write!(f, "{}", name)
    }
}

pub trait Handler: Send + Sync {
    fn name(&self) -> &str;

    /// Cheap pre-check used to skip handlers before any processing happens
    fn is_handling(&self, record: &LogRecord) -> bool;

    /// Handle one record.
    ///
    /// `Ok(true)` means the record was fully handled and must not bubble to
    /// the next handler.
    fn handle(&self, record: &LogRecord) -> Result<bool>;

    /// Handle records as one unit, in the given order
    fn handle_batch(&self, records: &[LogRecord]) -> Result<()> {
        for record in records {
            if self.is_handling(record) {
                self.handle(record)?;
            }
        }
        Ok(())
    }

    /// Release resources. Calling it more than once is a no-op.
    fn close(&self) -> Result<()>;

    fn as_processable(&self) -> Option<&dyn Processable> {
        None
    }

    fn as_formattable(&self) -> Option<&dyn Formattable> {
        None
    }

    fn as_resettable(&self) -> Option<&dyn Resettable> {
        None
    }
}

pub trait Processable {
    fn push_processor(&self, processor: SharedProcessor) -> Result<()>;

    /// Remove and return the most recently pushed processor
    fn pop_processor(&self) -> Result<SharedProcessor>;
}

pub trait Formattable {
    fn set_formatter(&self, formatter: SharedFormatter) -> Result<()>;

    fn formatter(&self) -> Result<SharedFormatter>;
}

/// Clears buffers and per-run state. Never fails.
pub trait Resettable {
    fn reset(&self);
}

macro_rules! forward_handler {
    ($ty:ty) => {
        impl<H: Handler + ?Sized> Handler for $ty {
            fn name(&self) -> &str {
                (**self).name()
            }

            fn is_handling(&self, record: &LogRecord) -> bool {
                (**self).is_handling(record)
            }

            fn handle(&self, record: &LogRecord) -> Result<bool> {
                (**self).handle(record)
            }

            fn handle_batch(&self, records: &[LogRecord]) -> Result<()> {
                (**self).handle_batch(records)
            }

            fn close(&self) -> Result<()> {
                (**self).close()
            }

            fn as_processable(&self) -> Option<&dyn Processable> {
                (**self).as_processable()
            }

            fn as_formattable(&self) -> Option<&dyn Formattable> {
                (**self).as_formattable()
            }

            fn as_resettable(&self) -> Option<&dyn Resettable> {
                (**self).as_resettable()
            }
        }
    };
}

forward_handler!(Box<H>);
forward_handler!(Arc<H>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        handled: AtomicUsize,
    }

    impl Handler for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn is_handling(&self, record: &LogRecord) -> bool {
            record.level() >= LogLevel::Warning
        }

        fn handle(&self, _record: &LogRecord) -> Result<bool> {
            self.handled.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }

        fn close(&self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_batch_skips_records_not_handled() {
        let handler = Counting {
            handled: AtomicUsize::new(0),
        };
        let records = vec![
            LogRecord::new(LogLevel::Info, "app", "skipped"),
            LogRecord::new(LogLevel::Error, "app", "kept"),
            LogRecord::new(LogLevel::Warning, "app", "kept"),
        ];

        handler.handle_batch(&records).unwrap();
        assert_eq!(handler.handled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_smart_pointers_forward() {
        let shared: Arc<dyn Handler> = Arc::new(Counting {
            handled: AtomicUsize::new(0),
        });
        let boxed: Box<dyn Handler> = Box::new(Arc::clone(&shared));

        assert_eq!(boxed.name(), "counting");
        assert!(boxed.as_processable().is_none());
        assert!(!boxed.handle(&LogRecord::new(LogLevel::Error, "app", "x")).unwrap());
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::Processable.to_string(), "Processable");
        assert_eq!(Capability::Resettable.to_string(), "Resettable");
    }
}
