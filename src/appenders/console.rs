//! Console appender implementation

use crate::core::{Appender, LogLevel, LogRecord, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

pub struct ConsoleAppender {
    use_colors: bool,
    stderr_level: LogLevel,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            stderr_level: LogLevel::Error,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Records at or above `level` go to stderr, the rest to stdout
    #[must_use]
    pub fn with_stderr_level(mut self, level: LogLevel) -> Self {
        self.stderr_level = level;
        self
    }

    fn paint(&self, record: &LogRecord, formatted: &str) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return formatted.color(record.level().color_code()).to_string();
        }
        let _ = record;
        formatted.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord, formatted: &str) -> Result<()> {
        let output = self.paint(record, formatted);

        if record.level() >= self.stderr_level {
            writeln!(std::io::stderr().lock(), "{}", output)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", output)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
