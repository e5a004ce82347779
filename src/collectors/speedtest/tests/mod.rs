//! Test module organization for speedtest collection
//!
//! This module organizes tests for the speedtest collector into focused
//! test modules, plus the shared fixtures they build on.


pub mod fixtures {
    //! Shared fixtures: canned CLI captures and a scripted launcher

    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use crate::collectors::speedtest::launcher::{CapturedOutput, SpeedtestLauncher};

    /// A complete `speedtest --format=json` success document
    pub const RESULT_JSON: &str = r#"{"type":"result","timestamp":"2025-11-03T18:04:33Z","ping":{"jitter":1.374,"latency":8.516,"low":7.922,"high":9.318},"download":{"bandwidth":117154059,"bytes":611787360,"elapsed":5604},"upload":{"bandwidth":11777849,"bytes":93581784,"elapsed":8001},"packetLoss":0.5,"isp":"Init7","interface":{"internalIp":"192.168.1.23","name":"eth0","macAddr":"AA:BB:CC:DD:EE:FF","isVpn":false,"externalIp":"85.195.241.10"},"server":{"id":21541,"host":"speedtest.init7.net","port":8080,"name":"Init7 AG","location":"Winterthur","country":"Switzerland","ip":"77.109.175.21"},"result":{"id":"a3c9e1f0","url":"https://www.speedtest.net/result/c/a3c9e1f0","persisted":true}}"#;

    /// The CLI reporting its own failure instead of a measurement
    pub const ERROR_JSON: &str = r#"{"type":"log","timestamp":"2025-11-03T18:04:33Z","message":"Configuration - Couldn't resolve host name (HostNotFoundException)","level":"error"}"#;

    /// One scripted response of the fake launcher
    pub enum ScriptedResponse {
        /// The subprocess ran and produced this capture
        Output(CapturedOutput),
        /// The spawn itself failed
        SpawnFailure(String),
    }

    impl ScriptedResponse {
        /// A clean capture carrying only the given stdout text
        pub fn stdout(text: &str) -> Self {
            Self::Output(CapturedOutput {
                stdout: text.to_string(),
                stderr: String::new(),
                exit_code: 0,
            })
        }
    }

    /// Launcher replaying scripted responses, recording every launch
    pub struct ScriptedLauncher {
        responses: Mutex<VecDeque<ScriptedResponse>>,
        launches: AtomicUsize,
        seen_args: Mutex<Vec<Vec<String>>>,
        seen_executables: Mutex<Vec<PathBuf>>,
    }

    impl ScriptedLauncher {
        pub fn new(responses: Vec<ScriptedResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                launches: AtomicUsize::new(0),
                seen_args: Mutex::new(Vec::new()),
                seen_executables: Mutex::new(Vec::new()),
            }
        }

        /// How many times the runner spawned the subprocess
        pub fn launch_count(&self) -> usize {
            self.launches.load(Ordering::SeqCst)
        }

        /// Argument vectors of every launch, in order
        pub fn seen_args(&self) -> Vec<Vec<String>> {
            self.seen_args.lock().unwrap().clone()
        }

        /// Executable paths of every launch, in order
        pub fn seen_executables(&self) -> Vec<PathBuf> {
            self.seen_executables.lock().unwrap().clone()
        }
    }

    // Implemented on the launcher itself; a shared `Arc` handle acts as a
    // launcher through the blanket impl, so a test can keep a handle for its
    // assertions while the runner owns a boxed clone.
    #[async_trait]
    impl SpeedtestLauncher for ScriptedLauncher {
        async fn launch(&self, executable: &Path, args: &[String]) -> Result<CapturedOutput> {
            self.launches.fetch_add(1, Ordering::SeqCst);
            self.seen_args.lock().unwrap().push(args.to_vec());
            self.seen_executables
                .lock()
                .unwrap()
                .push(executable.to_path_buf());

            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("Scripted launcher ran out of responses");
            match response {
                ScriptedResponse::Output(output) => Ok(output),
                ScriptedResponse::SpawnFailure(message) => Err(anyhow!(message)),
            }
        }
    }
}
