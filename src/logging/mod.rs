//! Diagnostic logging for sensor runs
//!
//! PRTG swallows everything a sensor prints outside the XML document, so
//! troubleshooting a scheduled sensor needs a file trail. The diagnostic log
//! appends one timestamped line per observation to a log file named for the
//! current calendar month, giving natural monthly rotation without any
//! rotation logic. Logging is strictly best-effort: a failure to write a log
//! line must never abort a measurement run.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

/// File name prefix for diagnostic log files
const LOG_FILE_PREFIX: &str = "prtg_speedtest";

/// Appends timestamped diagnostic lines to a monthly log file
///
/// Constructed once in `main` and handed to every component that wants to
/// record observations. When diagnostics are not requested every call is a
/// no-op, so callers never need to guard their `record` calls.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    /// Whether diagnostics were requested on the command line
    enabled: bool,
    /// Directory the monthly log files are written to (the program directory)
    directory: PathBuf,
}

impl DiagnosticLog {
    /// Creates a logger writing to the given directory when `enabled` is set
    pub fn new(enabled: bool, directory: PathBuf) -> Self {
        Self { enabled, directory }
    }

    /// Creates a logger that drops every message
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::new(),
        }
    }

    /// Whether this logger actually writes anything
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Path of the log file for the current calendar month
    pub fn current_file(&self) -> PathBuf {
        let month = Local::now().format("%Y-%m");
        self.directory
            .join(format!("{LOG_FILE_PREFIX}_{month}.log"))
    }

    /// Records one diagnostic line, timestamped to the second
    ///
    /// Write failures are swallowed; they are surfaced at debug level on
    /// stderr only, so the measurement pipeline is never interrupted by a
    /// full disk or a permission problem on the log directory.
    pub fn record(&self, message: &str) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.append(message) {
            debug!("failed to append diagnostic log line: {err}");
        }
    }

    fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_file())?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "{timestamp}  {message}")
    }

    /// Directory the log files live in
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
