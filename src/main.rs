use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use prtg_speedtest::collectors::speedtest::{SpeedtestError, SpeedtestRunner};
use prtg_speedtest::config::{program_dir, SensorConfig};
use prtg_speedtest::logging::DiagnosticLog;
use prtg_speedtest::report::{emit, render, Report};
use prtg_speedtest::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let program_dir = program_dir()?;

    // Invalid parameters and a missing Speedtest CLI abort before any
    // document is produced; everything past these two checks ends in a
    // well-formed PRTG response.
    let config = SensorConfig::resolve(&cli, &program_dir)?;
    let diag = DiagnosticLog::new(config.diagnostics, program_dir.clone());
    diag.record("sensor run started");

    let runner = SpeedtestRunner::new(&config, &program_dir, diag.clone())?;

    let report = match runner.run().await {
        Ok(record) => {
            info!(
                "measurement complete: server {} ({}), isp {}",
                record.server.id, record.server.name, record.isp
            );
            Report::from_record(&record, config.precision)
        }
        Err(err @ SpeedtestError::AttemptsExhausted { .. }) => {
            warn!("{err}");
            Report::failure()
        }
        Err(err) => return Err(err.into()),
    };

    let document = render(&report)?;
    emit(&document, config.output_path.as_deref(), &diag);

    diag.record("sensor run finished");
    Ok(())
}
