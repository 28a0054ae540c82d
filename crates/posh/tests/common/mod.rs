//! Shared helpers for CLI integration tests.

use assert_cmd::Command;
use assert_cmd::assert::Assert;

const POSH_VARS: [&str; 6] = [
    "POSH_CONJUNCTION",
    "POSH_OXFORD_COMMA",
    "POSH_QUEUE_CAPACITY",
    "POSH_LOG_LEVEL",
    "POSH_LOG",
    "RUST_LOG",
];

/// Runs the `posh` binary with a clean `POSH_*` environment.
pub struct TestHarness {
    envs: Vec<(String, String)>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self { envs: Vec::new() }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("posh").unwrap();
        for var in POSH_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Assert {
        self.command().args(args).assert()
    }
}
