//! Built-in processors
//!
//! Closures of type `Fn(LogRecord) -> LogRecord` work as processors too.

pub mod placeholder;
pub mod tag;
pub mod thread;
pub mod uid;

pub use placeholder::PlaceholderProcessor;
pub use tag::TagProcessor;
pub use thread::ThreadProcessor;
pub use uid::UidProcessor;

pub use crate::core::{Processor, ProcessorStack, SharedProcessor};
