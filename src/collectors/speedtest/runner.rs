//! Core speedtest runner implementation
//!
//! Locates the bundled Speedtest CLI, builds its argument vector and drives
//! the bounded retry loop. Speed measurements are inherently flaky - a DNS
//! hiccup or a saturated server turns an attempt into garbage - so the
//! runner absorbs transient failures with a small fixed cool-down between
//! attempts instead of failing the whole run on the first bad capture.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::SensorConfig;
use crate::logging::DiagnosticLog;

use super::errors::SpeedtestError;
use super::launcher::{ProcessLauncher, SpeedtestLauncher};
use super::parser::parse_result;
use super::record::SpeedtestRecord;

/// File name of the Speedtest CLI expected next to the sensor executable
#[cfg(windows)]
pub const SPEEDTEST_EXECUTABLE: &str = "speedtest.exe";
#[cfg(not(windows))]
pub const SPEEDTEST_EXECUTABLE: &str = "speedtest";

/// Cool-down between failed attempts
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Runs the Speedtest CLI until it yields a usable result or retries run out
pub struct SpeedtestRunner {
    /// Full path of the Speedtest CLI binary
    executable: PathBuf,
    /// Arguments passed to every attempt
    args: Vec<String>,
    /// Retries after the initial attempt
    max_retries: u8,
    /// Delay between failed attempts
    retry_delay: Duration,
    /// Process spawn seam, swapped for a scripted fake in tests
    launcher: Box<dyn SpeedtestLauncher>,
    /// Monthly diagnostic log
    diag: DiagnosticLog,
}

impl SpeedtestRunner {
    /// Creates a runner for the CLI bundled in `program_dir`
    ///
    /// Fails with [`SpeedtestError::DependencyMissing`] when the Speedtest
    /// CLI is not installed there - that is a setup error, not a transient
    /// one, so it is never retried.
    pub fn new(
        config: &SensorConfig,
        program_dir: &Path,
        diag: DiagnosticLog,
    ) -> Result<Self, SpeedtestError> {
        let executable = program_dir.join(SPEEDTEST_EXECUTABLE);
        if !executable.is_file() {
            diag.record(&format!(
                "speedtest executable missing at {}",
                executable.display()
            ));
            return Err(SpeedtestError::DependencyMissing { path: executable });
        }

        Ok(Self {
            executable,
            args: build_args(config),
            max_retries: config.max_retries,
            retry_delay: RETRY_DELAY,
            launcher: Box::new(ProcessLauncher),
            diag,
        })
    }

    /// Creates a runner with a custom launcher, executable path and delay
    ///
    /// Test seam: the executable is not checked for existence and the
    /// cool-down can be shrunk so retry behavior is testable in
    /// milliseconds.
    pub fn with_launcher(
        config: &SensorConfig,
        executable: PathBuf,
        launcher: Box<dyn SpeedtestLauncher>,
        retry_delay: Duration,
        diag: DiagnosticLog,
    ) -> Self {
        Self {
            executable,
            args: build_args(config),
            max_retries: config.max_retries,
            retry_delay,
            launcher,
            diag,
        }
    }

    /// Arguments every attempt launches the CLI with
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs the attempt loop until a usable result or exhaustion
    ///
    /// Up to `max_retries + 1` attempts; the cool-down runs only between
    /// attempts, never after the last one. Spawn failures, undecodable
    /// captures and non-result records are all just failed attempts.
    pub async fn run(&self) -> Result<SpeedtestRecord, SpeedtestError> {
        let attempts = self.max_retries + 1;

        for attempt in 1..=attempts {
            if attempt > 1 {
                debug!("waiting {:?} before retry", self.retry_delay);
                tokio::time::sleep(self.retry_delay).await;
            }

            info!(
                "speedtest attempt {attempt}/{attempts}: {} {}",
                self.executable.display(),
                self.args.join(" ")
            );

            match self.launcher.launch(&self.executable, &self.args).await {
                Ok(captured) => {
                    if captured.exit_code != 0 {
                        debug!("speedtest exited with code {}", captured.exit_code);
                    }
                    let combined = captured.combined();
                    match parse_result(&combined) {
                        Ok(record) => {
                            self.diag.record(&format!(
                                "attempt {attempt}/{attempts} succeeded: server {} ({}, {}), isp {}",
                                record.server.id,
                                record.server.name,
                                record.server.location,
                                record.isp
                            ));
                            return Ok(record);
                        }
                        Err(err) => {
                            warn!("attempt {attempt}/{attempts} unusable: {err}");
                            self.diag.record(&format!(
                                "attempt {attempt}/{attempts} unusable ({err}); raw response: {}",
                                combined.trim()
                            ));
                        }
                    }
                }
                Err(err) => {
                    warn!("attempt {attempt}/{attempts} failed to launch: {err}");
                    self.diag
                        .record(&format!("attempt {attempt}/{attempts} failed to launch: {err}"));
                }
            }
        }

        self.diag
            .record(&format!("giving up after {attempts} attempt(s)"));
        Err(SpeedtestError::AttemptsExhausted { attempts })
    }
}

/// Builds the Speedtest CLI argument vector for the given configuration
///
/// Argument order matches the CLI's documented invocation: optional server
/// selector, optional GDPR consent, machine-readable format, numeric
/// precision, license consent (always required for non-interactive runs).
fn build_args(config: &SensorConfig) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(server_id) = &config.server_id {
        args.push(format!("--server-id={server_id}"));
    }
    if config.accept_gdpr {
        args.push("--accept-gdpr".to_string());
    }
    args.push("--format=json".to_string());
    args.push(format!("--precision={}", config.precision));
    args.push("--accept-license".to_string());
    args
}
