//! Isolated environment for running the piemenu binary.
//!
//! The user config directory points into a temp dir and every `PIEMENU_*`
//! override from the caller's environment is removed.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const OVERRIDES: [&str; 12] = [
    "PIEMENU_BORDER_WIDTH",
    "PIEMENU_SEPARATOR_WIDTH",
    "PIEMENU_PADDING",
    "PIEMENU_ITEM_WIDTH",
    "PIEMENU_DIAMETER",
    "PIEMENU_FONT",
    "PIEMENU_BACKGROUND",
    "PIEMENU_FOREGROUND",
    "PIEMENU_SELBACKGROUND",
    "PIEMENU_SELFOREGROUND",
    "PIEMENU_SEPARATOR",
    "PIEMENU_BORDER",
];

/// Result of running the binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}):\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

pub struct TestEnv {
    pub home: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    /// Set an extra environment variable for every run
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Write a file relative to the temp home and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Where the binary looks for the user config
    pub fn user_config(&self, content: &str) -> PathBuf {
        self.write(".config/piemenu/config.toml", content)
    }

    /// Run the binary with `stdin` piped in
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut command = Command::new(env!("CARGO_BIN_EXE_piemenu"));
        command
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in OVERRIDES {
            command.env_remove(key);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }

        let mut child = command.spawn().expect("failed to spawn piemenu");
        {
            let mut pipe = child.stdin.take().unwrap();
            pipe.write_all(stdin.as_bytes()).unwrap();
        }
        let output = child.wait_with_output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
