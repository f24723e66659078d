//! # Rust Log Pipeline
//!
//! A handler-pipeline logging library: loggers dispatch records through a
//! stack of handlers, each with its own processors, formatter and output.
//!
//! ## Features
//!
//! - **Composable Handlers**: decorators wrap any handler and forward its
//!   optional capabilities (processors, formatter, reset)
//! - **Bubbling Dispatch**: a handler can stop a record from reaching the
//!   handlers below it
//! - **Multiple Outputs**: console, file and in-memory capture
//! - **Thread Safe**: handlers and loggers are `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//! use std::sync::Arc;
//!
//! let capture = Arc::new(TestHandler::capturing(LogLevel::Debug));
//! let wrapped = HandlerWrapper::new(Arc::clone(&capture));
//! wrapped.push_processor(Arc::new(|r: LogRecord| r.with_extra_field("request", "abc")))?;
//!
//! let logger = Logger::builder("app").handler(wrapped).build();
//! logger.info("request served");
//!
//! assert_eq!(capture.records()[0].extra().get("request").and_then(|v| v.as_str()), Some("abc"));
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod formatters;
pub mod handlers;
pub mod macros;
pub mod processors;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        Appender, Capability, FieldValue, Formattable, Formatter, Handler, HandlerErrorCallback,
        LogContext, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerRegistry,
        Processable, Processor, Resettable, Result, SharedFormatter, SharedProcessor,
        TimestampFormat,
    };
    pub use crate::formatters::{BatchMode, JsonFormatter, LineFormatter, LogfmtFormatter};
    pub use crate::handlers::{
        BufferHandler, FileHandler, FilterHandler, HandlerWrapper, NullHandler,
        ProcessingHandler, RecordPredicate, SamplingHandler, StreamHandler, TestHandler,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    Appender, Capability, FieldValue, Formattable, Formatter, Handler, LogContext, LogLevel,
    LogRecord, Logger, LoggerBuilder, LoggerError, LoggerRegistry, Processable, Processor,
    Resettable, Result,
};
pub use handlers::HandlerWrapper;
