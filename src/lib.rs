//! PRTG custom sensor around the Ookla Speedtest CLI
//!
//! The pipeline is a single sequential flow: resolve and validate the
//! command-line parameters, drive the Speedtest CLI through a bounded retry
//! loop, decode its JSON result, and render the PRTG XML document. Only
//! configuration and dependency problems abort the run; a failed
//! measurement still produces a well-formed error document so the
//! monitoring platform gets a parseable response every polling interval.

pub mod cli;
pub mod collectors;
pub mod config;
pub mod logging;
pub mod report;

pub use cli::Cli;
pub use collectors::speedtest::{SpeedtestError, SpeedtestRecord, SpeedtestRunner};
pub use config::{ConfigError, SensorConfig};
pub use logging::DiagnosticLog;
pub use report::Report;
