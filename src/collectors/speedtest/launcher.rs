//! Subprocess seam for launching the Speedtest CLI
//!
//! The retry loop talks to the CLI through the [`SpeedtestLauncher`] trait
//! so tests can substitute a scripted fake for the real process spawn. The
//! real implementation passes the argument vector directly to the process
//! API - never through a shell - so a server identifier containing shell
//! metacharacters is just an odd server identifier, not an injection.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

/// Captured output of one Speedtest CLI invocation
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CapturedOutput {
    /// Stdout and stderr as one text, the way the parser consumes it
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Spawns the Speedtest CLI and waits for it to finish
#[async_trait]
pub trait SpeedtestLauncher: Send + Sync {
    async fn launch(&self, executable: &Path, args: &[String]) -> Result<CapturedOutput>;
}

/// Delegating impl so a shared `Arc` handle can itself act as a launcher:
/// a caller keeps the `Arc` for inspection while the runner owns a boxed
/// clone.
#[async_trait]
impl<T: SpeedtestLauncher + ?Sized> SpeedtestLauncher for Arc<T> {
    async fn launch(&self, executable: &Path, args: &[String]) -> Result<CapturedOutput> {
        (**self).launch(executable, args).await
    }
}

/// Launcher backed by a real subprocess spawn
#[derive(Debug, Default)]
pub struct ProcessLauncher;

#[async_trait]
impl SpeedtestLauncher for ProcessLauncher {
    async fn launch(&self, executable: &Path, args: &[String]) -> Result<CapturedOutput> {
        let output = Command::new(executable).args(args).output().await?;

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
