//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to a
//! call on the logger and evaluates to its `bool` result.
//!
//! # Examples
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//! use rust_log_pipeline::info;
//!
//! let logger = Logger::builder("app").handler(NullHandler::default()).build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::debug;
/// debug!(logger, "Cache size: {}", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::notice;
/// notice!(logger, "Config reloaded from {}", "app.toml");
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::error;
/// error!(logger, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::critical;
/// critical!(logger, "Component {} unavailable", "db");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an alert-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::alert;
/// alert!(logger, "Disk usage at {}%", 98);
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_log_pipeline::emergency;
/// emergency!(logger, "System unusable: {}", "out of memory");
/// ```
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, $($arg)+)
    };
}
