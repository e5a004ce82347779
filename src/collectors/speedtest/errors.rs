//! Error types for the speedtest collector
//!
//! Two failure domains with very different handling: a missing Speedtest CLI
//! is a setup problem that aborts the run before anything is rendered, while
//! exhausted measurement attempts still produce a well-formed PRTG error
//! document for the monitoring platform.

use std::path::PathBuf;

use thiserror::Error;

/// Terminal outcomes of the measurement invoker
#[derive(Error, Debug)]
pub enum SpeedtestError {
    /// The Speedtest CLI is not installed next to the sensor executable.
    /// Fatal and never retried: retrying cannot make the binary appear.
    #[error("speedtest executable not found at {} - install the Ookla Speedtest CLI next to the sensor", path.display())]
    DependencyMissing { path: PathBuf },

    /// Every attempt either failed to parse or reported a non-result kind
    #[error("no usable speedtest result after {attempts} attempt(s)")]
    AttemptsExhausted { attempts: u8 },
}

/// Why a single measurement attempt was discarded
///
/// Attempt-level failures never leave the retry loop; they are logged and
/// folded into [`SpeedtestError::AttemptsExhausted`] once the loop gives up.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The captured text contained no decodable JSON object
    #[error("no JSON object found in speedtest output")]
    NoJsonObject,

    /// A JSON object was found but did not decode into a result record
    #[error("malformed speedtest JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The CLI reported something other than a measurement result,
    /// e.g. its own internal error object or a network setup failure
    #[error("speedtest reported kind {kind:?} instead of a result")]
    UnexpectedKind { kind: String },
}
