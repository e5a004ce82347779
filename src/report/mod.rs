//! Report construction for the PRTG sensor document
//!
//! Maps one decoded speedtest record (or the absence of one) onto the fixed
//! PRTG channel set. The channel list, units and order never vary: PRTG
//! matches channels by name across polling intervals, so a stable set is
//! part of the wire contract.
//!
//! ## Module Organization
//!
//! - `formatting`: rounding and unit conversion helpers
//! - `prtg`: XML document rendering and emission

pub mod formatting;
pub mod prtg;

pub use prtg::{emit, render};

use crate::collectors::speedtest::SpeedtestRecord;
use formatting::{bandwidth_to_mbps, format_channel_value};

/// One named, unit-tagged measurement in the sensor document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Channel name PRTG keys its history on
    pub name: &'static str,
    /// Unit label shown next to the value
    pub unit: &'static str,
    /// Value already rounded and formatted at the configured precision
    pub value: String,
    /// Whether PRTG should treat the value as a float
    pub is_float: bool,
    /// Whether the channel appears in PRTG's charts
    pub show_chart: bool,
    /// Whether the channel appears in PRTG's tables
    pub show_table: bool,
}

impl Channel {
    /// A float channel with chart and table display enabled
    fn float(name: &'static str, unit: &'static str, value: String) -> Self {
        Self {
            name,
            unit,
            value,
            is_float: true,
            show_chart: true,
            show_table: true,
        }
    }
}

/// The complete sensor response for one run
///
/// Constructed once per run and immediately serialized; a run that gets as
/// far as measuring always produces one of these two shapes, so the
/// monitoring platform receives a parseable document every interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Five channels in fixed order
    Measurements(Vec<Channel>),
    /// The error marker PRTG shows when the measurement itself failed
    Failure,
}

impl Report {
    /// Builds the five-channel report from a successful measurement
    ///
    /// Bandwidths arrive in bytes per second and are converted to megabits
    /// per second. Absent packet loss is reported as 0 so the channel set
    /// stays stable; a path that cannot measure loss reads as lossless
    /// rather than making the channel vanish from PRTG.
    pub fn from_record(record: &SpeedtestRecord, precision: u8) -> Self {
        let channels = vec![
            Channel::float(
                "Download Speed",
                "Mb/s",
                format_channel_value(bandwidth_to_mbps(record.download.bandwidth), precision),
            ),
            Channel::float(
                "Upload Speed",
                "Mb/s",
                format_channel_value(bandwidth_to_mbps(record.upload.bandwidth), precision),
            ),
            Channel::float(
                "Latency",
                "ms",
                format_channel_value(record.ping.latency, precision),
            ),
            Channel::float(
                "Jitter",
                "ms",
                format_channel_value(record.ping.jitter, precision),
            ),
            Channel::float(
                "Packet Loss",
                "%",
                format_channel_value(record.packet_loss.unwrap_or(0.0), precision),
            ),
        ];
        Self::Measurements(channels)
    }

    /// The report for a run whose every measurement attempt failed
    pub fn failure() -> Self {
        Self::Failure
    }
}
