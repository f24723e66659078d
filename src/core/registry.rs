//! Name to logger lookup table
//!
//! The registry is an ordinary value: create one, share it behind an `Arc`
//! and hand it to the components that need to look loggers up.

use super::error::{LoggerError, Result};
use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Thread-safe map from logger name to logger
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::new();
/// registry.add(Arc::new(Logger::new("billing")), false)?;
///
/// let logger = registry.get("billing")?;
/// assert_eq!(logger.name(), "billing");
/// assert!(registry.get("shipping").is_err());
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `logger` under its own name
    ///
    /// Fails with [`LoggerError::LoggerAlreadyRegistered`] when the name is
    /// taken and `overwrite` is false.
    pub fn add(&self, logger: Arc<Logger>, overwrite: bool) -> Result<()> {
        let mut loggers = self.loggers.write();
        let name = logger.name().to_string();
        if !overwrite && loggers.contains_key(&name) {
            return Err(LoggerError::LoggerAlreadyRegistered { name });
        }
        loggers.insert(name, logger);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<Logger>> {
        self.loggers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| LoggerError::UnknownLogger {
                name: name.to_string(),
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.write().remove(name)
    }

    pub fn clear(&self) {
        self.loggers.write().clear();
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates_unless_overwriting() {
        let registry = LoggerRegistry::new();
        let first = Arc::new(Logger::new("app"));
        registry.add(Arc::clone(&first), false).unwrap();

        let err = registry.add(Arc::new(Logger::new("app")), false).unwrap_err();
        assert!(matches!(err, LoggerError::LoggerAlreadyRegistered { .. }));
        assert!(Arc::ptr_eq(&registry.get("app").unwrap(), &first));

        let second = Arc::new(Logger::new("app"));
        registry.add(Arc::clone(&second), true).unwrap();
        assert!(Arc::ptr_eq(&registry.get("app").unwrap(), &second));
    }

    #[test]
    fn test_unknown_logger() {
        let registry = LoggerRegistry::new();
        let err = registry.get("missing").unwrap_err();
        assert_eq!(err.to_string(), "requested logger 'missing' is not registered");
    }

    #[test]
    fn test_names_sorted_and_remove() {
        let registry = LoggerRegistry::new();
        for name in ["worker", "api", "db"] {
            registry.add(Arc::new(Logger::new(name)), false).unwrap();
        }
        assert_eq!(registry.names(), vec!["api", "db", "worker"]);

        assert!(registry.remove("db").is_some());
        assert!(!registry.has("db"));
        assert!(registry.remove("db").is_none());

        registry.clear();
        assert!(registry.is_empty());
    }
}
