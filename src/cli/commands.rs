use std::path::PathBuf;

use clap::Parser;

/// Main CLI structure for the prtg-speedtest sensor
/// Uses clap's derive macros for automatic CLI generation
#[derive(Parser, Debug)]
#[command(author = "Kaipo Chen")]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "PRTG custom sensor - run the Ookla Speedtest CLI and report the results as PRTG XML")]
#[command(long_about = "Runs the Ookla Speedtest CLI bundled next to this executable, retries \
transient failures with a fixed cool-down, and prints a PRTG sensor document with the measured \
Download Speed, Upload Speed, Latency, Jitter and Packet Loss channels. A failed measurement \
still produces a well-formed PRTG error document, so the monitoring platform receives a \
parseable response on every polling interval.\n\n\
Examples:\n  \
prtg-speedtest                                  # Auto-selected server, defaults\n  \
prtg-speedtest --server-id 21541                # Pin the Ookla server\n  \
prtg-speedtest --precision 3 --retries 4        # More digits, more patience\n  \
prtg-speedtest --output result.xml              # Mirror the document next to the binary\n  \
prtg-speedtest --accept-gdpr --diagnostics      # EU host with a monthly debug log")]
pub struct Cli {
    /// Identifier of the Ookla server to measure against
    /// When omitted the Speedtest CLI picks the nearest server itself
    #[arg(short = 's', long, help = "Ookla server id to test against (default: auto-selected)")]
    pub server_id: Option<String>,

    /// Mirror the XML document to this file in addition to standard output
    /// Relative paths are resolved against the directory containing this
    /// executable, not the current working directory
    #[arg(
        short = 'o',
        long,
        help = "Also write the XML document to this file (relative paths resolve next to the executable)"
    )]
    pub output: Option<PathBuf>,

    /// Number of digits after the decimal point in reported values (0-8)
    #[arg(
        short = 'p',
        long,
        default_value = "1",
        help = "Digits after the decimal point in channel values (0-8)"
    )]
    pub precision: u32,

    /// How many times to retry after a failed measurement attempt (0-4)
    /// Each retry waits 5 seconds before launching the Speedtest CLI again
    #[arg(
        short = 'r',
        long,
        default_value = "2",
        help = "Retries after a failed attempt, with a 5s cool-down between attempts (0-4)"
    )]
    pub retries: u32,

    /// Pass the GDPR consent flag to the Speedtest CLI
    /// Required in certain jurisdictions before the CLI will run at all
    #[arg(long, help = "Consent to Ookla data collection (required in some jurisdictions)")]
    pub accept_gdpr: bool,

    /// Append timestamped diagnostics to a monthly log file next to the
    /// executable (one file per calendar month)
    #[arg(short = 'd', long, help = "Write diagnostics to a monthly log file next to the executable")]
    pub diagnostics: bool,
}
