//! Error types for the log pipeline

use super::handler::Capability;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A decorator was asked to forward a call the wrapped handler cannot serve
    #[error("wrapped handler does not implement {capability}")]
    CapabilityMismatch { capability: Capability },

    /// Pop from an empty processor or handler stack
    #[error("tried to pop from an empty {stack} stack")]
    EmptyStack { stack: &'static str },

    /// Call on a handler after `close()`
    #[error("handler '{handler}' is closed")]
    HandlerClosed { handler: String },

    /// Handler panicked while handling a record
    #[error("handler '{handler}' panicked: {message}")]
    HandlerPanicked { handler: String, message: String },

    /// No logger registered under this name
    #[error("requested logger '{name}' is not registered")]
    UnknownLogger { name: String },

    /// Registering a logger whose name is already taken
    #[error("logger '{name}' is already registered")]
    LoggerAlreadyRegistered { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Formatter could not render a record
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },
}

impl LoggerError {
    /// Create a capability mismatch error
    pub fn capability_mismatch(capability: Capability) -> Self {
        LoggerError::CapabilityMismatch { capability }
    }

    /// Create an empty stack error
    pub fn empty_stack(stack: &'static str) -> Self {
        LoggerError::EmptyStack { stack }
    }

    /// Create a closed handler error
    pub fn handler_closed(handler: impl Into<String>) -> Self {
        LoggerError::HandlerClosed {
            handler: handler.into(),
        }
    }

    pub fn handler_panicked(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HandlerPanicked {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Whether this error means an optional capability was missing
    pub fn is_capability_mismatch(&self) -> bool {
        matches!(self, LoggerError::CapabilityMismatch { .. })
    }
}
