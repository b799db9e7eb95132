//! Append-only run log for batch conversions.
//!
//! A [`RunLog`] is an injected capability: batch mode opens one and passes
//! it down, so no component reaches into process-global logger state. Lines
//! are formatted `YYYY-MM-DD HH:MM:SS - LEVEL - message`.
//!
//! The log is informational, not part of the functional contract: write
//! failures are swallowed so a full disk never fails a conversion.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Default log file, created in the working directory in batch mode.
pub const LOG_FILE_NAME: &str = "asciiartify.log";

/// Handle to an append-only log file, or a no-op sink.
///
/// `Sync` via an internal mutex so parallel per-file conversions can log.
pub struct RunLog {
    sink: Option<Mutex<BufWriter<File>>>,
}

impl RunLog {
    /// Open `path` for appending, creating the file if absent.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Some(Mutex::new(BufWriter::new(file))),
        })
    }

    /// A handle that discards every message.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn info(&self, message: &str) {
        self.append("INFO", message);
    }

    pub fn warning(&self, message: &str) {
        self.append("WARNING", message);
    }

    pub fn error(&self, message: &str) {
        self.append("ERROR", message);
    }

    fn append(&self, level: &str, message: &str) {
        let Some(sink) = &self.sink else { return };
        let Ok(mut writer) = sink.lock() else { return };
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(writer, "{timestamp} - {level} - {message}");
        let _ = writer.flush();
    }
}
