#![allow(dead_code)]

use ipcforge::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TRACE_FILE: &str = "traces.txt";

/// Scratch results directory holding a benchmark list and per-pair logs.
pub struct ResultsDir {
    pub dir: TempDir,
}

impl ResultsDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn benchmarks(self, names: &[&str]) -> Self {
        let mut body = names.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        fs::write(self.path().join(TRACE_FILE), body).unwrap();
        self
    }

    /// A log shaped like a simulator run with one marker line carrying `ipc`.
    pub fn result(self, config: &str, bench: &str, ipc: &str) -> Self {
        let body = format!(
            "Warmup finished CPU 0 instructions: 1000000 cycles: 900000\n\
             Finished CPU 0 instructions: 2000000 cycles: 1300000 cumulative IPC: 1.53846\n\
             \n\
             CPU 0 cumulative IPC: {} instructions: 2000000 cycles: 1300000\n\
             L1D TOTAL ACCESS: 123456 HIT: 120000 MISS: 3456\n",
            ipc
        );
        self.raw(config, bench, &body)
    }

    pub fn raw(self, config: &str, bench: &str, body: &str) -> Self {
        fs::write(self.path().join(format!("{}-{}.txt", config, bench)), body).unwrap();
        self
    }

    pub fn config(&self) -> Config {
        let mut cfg = Config::rooted_at(self.path());
        cfg.paths.trace_file = TRACE_FILE.to_string();
        cfg
    }

    pub fn output(&self) -> PathBuf {
        self.config().paths.output_path()
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).unwrap()
    }
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
