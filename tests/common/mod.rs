#![allow(dead_code)]

pub mod mock_speech;

use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;
use tempfile::TempDir;

use pantryvoice::pipeline::Pipeline;

pub fn pipeline() -> Pipeline {
    Pipeline::with_builtin_lexicon().expect("Built-in lexicon must validate")
}

pub fn shared_pipeline() -> Arc<Pipeline> {
    Arc::new(pipeline())
}

pub fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Runs the binary against throwaway config and data directories
pub struct CliContext {
    pub temp_dir: TempDir,
}

impl CliContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("config"))
            .expect("Failed to create config dir");
        std::fs::create_dir_all(temp_dir.path().join("data")).expect("Failed to create data dir");
        Self { temp_dir }
    }

    pub fn store_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("data/pantryvoice/lists.json")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, None)
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_pantryvoice");
        let root: &Path = self.temp_dir.path();

        let mut cmd = Command::new(bin_path);
        cmd.args(args)
            .env("XDG_CONFIG_HOME", root.join("config"))
            .env("XDG_DATA_HOME", root.join("data"))
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        match stdin {
            Some(input) => {
                use std::io::Write;
                cmd.stdin(std::process::Stdio::piped());
                let mut child = cmd.spawn().expect("Failed to spawn pantryvoice");
                child
                    .stdin
                    .take()
                    .expect("stdin is piped")
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
                child.wait_with_output().expect("Failed to wait for pantryvoice")
            }
            None => {
                cmd.stdin(std::process::Stdio::null());
                cmd.output().expect("Failed to run pantryvoice")
            }
        }
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
