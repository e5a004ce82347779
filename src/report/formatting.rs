//! Formatting utilities for channel values
//!
//! This module provides the numeric conversions between what the Speedtest
//! CLI reports and what the PRTG document carries. It ensures consistent
//! rounding and formatting across all channels.

/// Bytes per second in one megabit per second
const BYTES_PER_MEGABIT: f64 = 125_000.0;

/// Converts a bandwidth from bytes per second to megabits per second
///
/// The Speedtest CLI reports transfer bandwidth in bytes per second; PRTG
/// channels carry megabits per second.
///
/// # Examples
///
/// ```
/// use prtg_speedtest::report::formatting::bandwidth_to_mbps;
///
/// assert_eq!(bandwidth_to_mbps(125_000_000), 1000.0);
/// assert_eq!(bandwidth_to_mbps(12_500), 0.1);
/// assert_eq!(bandwidth_to_mbps(0), 0.0);
/// ```
pub fn bandwidth_to_mbps(bytes_per_sec: u64) -> f64 {
    bytes_per_sec as f64 / BYTES_PER_MEGABIT
}

/// Rounds a value to the given number of decimal digits
///
/// Ties round half away from zero (the behavior of [`f64::round`]), so
/// 0.25 at one digit becomes 0.3 and -0.25 becomes -0.3.
///
/// # Examples
///
/// ```
/// use prtg_speedtest::report::formatting::round_to_precision;
///
/// assert_eq!(round_to_precision(0.25, 1), 0.3);
/// assert_eq!(round_to_precision(-0.25, 1), -0.3);
/// assert_eq!(round_to_precision(8.516, 2), 8.52);
/// assert_eq!(round_to_precision(8.516, 0), 9.0);
/// ```
pub fn round_to_precision(value: f64, digits: u8) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Rounds and formats a value with exactly `digits` fractional digits
///
/// This is the one formatting path every channel value goes through, so a
/// report rendered twice from the same record is byte-identical.
///
/// # Examples
///
/// ```
/// use prtg_speedtest::report::formatting::format_channel_value;
///
/// assert_eq!(format_channel_value(1000.0, 1), "1000.0");
/// assert_eq!(format_channel_value(8.516, 3), "8.516");
/// assert_eq!(format_channel_value(8.516, 8), "8.51600000");
/// assert_eq!(format_channel_value(25.4, 0), "25");
/// ```
pub fn format_channel_value(value: f64, digits: u8) -> String {
    format!("{:.*}", digits as usize, round_to_precision(value, digits))
}
