//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
#[cfg(feature = "file")]
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    use_locking: bool,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            use_locking: false,
        })
    }

    /// Take an exclusive advisory lock around every write
    ///
    /// Lets several processes append to the same file without interleaving
    /// partial lines. Each locked write is flushed before the lock is released.
    #[cfg(feature = "file")]
    #[must_use]
    pub fn with_locking(mut self, use_locking: bool) -> Self {
        self.use_locking = use_locking;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_locked(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        #[cfg(feature = "file")]
        if self.use_locking {
            let path = self.path.display().to_string();
            writer
                .get_ref()
                .lock_exclusive()
                .map_err(|_| LoggerError::file_lock(path.clone()))?;
            let written = writer.write_all(line.as_bytes()).and_then(|_| writer.flush());
            let unlocked = writer.get_ref().unlock();
            written?;
            return unlocked.map_err(|_| LoggerError::file_lock(path));
        }

        writer.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _record: &LogRecord, formatted: &str) -> Result<()> {
        let mut line = String::with_capacity(formatted.len() + 1);
        line.push_str(formatted);
        line.push('\n');
        self.write_locked(&line)
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()?;
        self.writer = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        if let Err(e) = self.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' on drop: {}",
                self.path.display(),
                e
            );
        }
    }
}
