//! Sensor configuration resolution and validation
//!
//! Validates the raw command-line parameters into a [`SensorConfig`] before
//! anything else happens: out-of-range values are rejected here, so an
//! invalid invocation never spawns a subprocess. Relative output paths are
//! resolved against the directory containing the sensor executable rather
//! than the process working directory — PRTG schedules sensors from an
//! unpredictable working directory, and the output file still has to land
//! in a predictable place.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::cli::Cli;

/// Largest accepted number of digits after the decimal point
pub const MAX_PRECISION: u8 = 8;
/// Largest accepted number of retries after the initial attempt
pub const MAX_RETRIES: u8 = 4;
/// Digits after the decimal point when none are requested
pub const DEFAULT_PRECISION: u8 = 1;
/// Retries after the initial attempt when none are requested
pub const DEFAULT_RETRIES: u8 = 2;

/// Rejection of an invalid invocation parameter
///
/// Raised before any subprocess is launched; a run that fails here produces
/// no output document at all.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested precision is outside the supported digit range
    #[error("precision must be between 0 and {MAX_PRECISION}, got {value}")]
    PrecisionOutOfRange { value: u32 },

    /// Requested retry count is outside the supported range
    #[error("retries must be between 0 and {MAX_RETRIES}, got {value}")]
    RetriesOutOfRange { value: u32 },
}

/// Validated parameters for one sensor run
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Ookla server identifier to test against; `None` lets the CLI choose
    pub server_id: Option<String>,
    /// Where to mirror the XML document, already resolved to an absolute-ish
    /// location (relative inputs are anchored at the program directory)
    pub output_path: Option<PathBuf>,
    /// Digits after the decimal point in reported channel values
    pub precision: u8,
    /// Retries after the initial attempt before declaring failure
    pub max_retries: u8,
    /// Pass the GDPR data-collection consent flag to the Speedtest CLI
    pub accept_gdpr: bool,
    /// Write the monthly diagnostic log
    pub diagnostics: bool,
}

impl SensorConfig {
    /// Validates the parsed command line into a usable configuration
    ///
    /// `program_dir` anchors relative output paths; it is injected rather
    /// than looked up here so tests can resolve against a temp directory.
    pub fn resolve(cli: &Cli, program_dir: &Path) -> Result<Self, ConfigError> {
        if cli.precision > MAX_PRECISION as u32 {
            return Err(ConfigError::PrecisionOutOfRange {
                value: cli.precision,
            });
        }
        if cli.retries > MAX_RETRIES as u32 {
            return Err(ConfigError::RetriesOutOfRange { value: cli.retries });
        }

        let output_path = cli
            .output
            .as_ref()
            .map(|path| resolve_output_path(path, program_dir));

        Ok(Self {
            server_id: cli.server_id.clone(),
            output_path,
            precision: cli.precision as u8,
            max_retries: cli.retries as u8,
            accept_gdpr: cli.accept_gdpr,
            diagnostics: cli.diagnostics,
        })
    }
}

/// Anchors a relative output path at the program directory
fn resolve_output_path(path: &Path, program_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        program_dir.join(path)
    }
}

/// Directory containing the running executable
///
/// Used both to anchor relative output paths and to locate the bundled
/// Speedtest CLI next to the sensor binary.
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}
