//! Data model of the Speedtest CLI's JSON result
//!
//! Mirrors the fields of `speedtest --format=json` the sensor actually uses.
//! The CLI emits a lot more (result URLs, per-phase byte counters, internal
//! timings); serde ignores everything not modeled here.

use serde::Deserialize;

/// One decoded speedtest result
///
/// Created fresh per invocation attempt and discarded on failure; the last
/// successful record is what reaches the report renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeedtestRecord {
    /// Discriminator emitted by the CLI; `"result"` marks a completed
    /// measurement, anything else is the CLI reporting its own failure
    #[serde(rename = "type")]
    pub result_kind: String,
    /// The Ookla server the measurement ran against
    pub server: ServerInfo,
    /// Local network interface the measurement used
    pub interface: InterfaceInfo,
    /// Name of the internet service provider as seen by Ookla
    pub isp: String,
    /// Latency measurements in milliseconds
    pub ping: PingStats,
    /// Download phase results
    pub download: TransferStats,
    /// Upload phase results
    pub upload: TransferStats,
    /// Packet loss in percent; absent when the network path between client
    /// and server cannot measure it
    #[serde(rename = "packetLoss", default)]
    pub packet_loss: Option<f64>,
}

impl SpeedtestRecord {
    /// Whether the CLI marked this record as a completed measurement
    pub fn is_result(&self) -> bool {
        self.result_kind == "result"
    }
}

/// Identity and location of the Ookla server used for the measurement
#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfo {
    /// Numeric Ookla server identifier
    pub id: u64,
    /// Human-readable server name
    pub name: String,
    /// City or area the server is located in
    pub location: String,
    /// Country the server is located in
    pub country: String,
    /// Hostname the measurement connected to
    pub host: String,
    /// IP address the measurement connected to
    #[serde(default)]
    pub ip: Option<String>,
}

/// Local interface the measurement ran over
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceInfo {
    /// Address of the interface on the local network
    pub internal_ip: String,
    /// Public address the measurement appeared from
    pub external_ip: String,
    /// Whether the CLI detected a VPN on the path
    pub is_vpn: bool,
}

/// Latency and jitter in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct PingStats {
    /// Round-trip latency in milliseconds
    pub latency: f64,
    /// Latency variation in milliseconds
    pub jitter: f64,
}

/// Result of one transfer phase (download or upload)
#[derive(Debug, Clone, Deserialize)]
pub struct TransferStats {
    /// Measured throughput in bytes per second
    pub bandwidth: u64,
}
