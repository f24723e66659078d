//! Core types and traits: records, levels, handlers, processors, the logger

pub mod appender;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod processor;
pub mod registry;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use formatter::{Formatter, SharedFormatter};
pub use handler::{Capability, Formattable, Handler, Processable, Resettable};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{HandlerErrorCallback, Logger, LoggerBuilder};
pub use processor::{Processor, ProcessorStack, SharedProcessor};
pub use registry::LoggerRegistry;
pub use timestamp::TimestampFormat;
