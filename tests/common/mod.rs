//! Shared utilities for launcher integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A scratch area with a stand-in server.
///
/// The launcher is pointed at `sh` with the working directory set to
/// `bin_dir`, so the default `run <app> ...` arguments make `sh` execute the
/// script file named `run`. The script records its arguments and `DATA_DIR`
/// to `out_file` and exits with `$FAKE_EXIT` (default 0).
pub struct FakeServer {
    pub root: tempfile::TempDir,
    pub bin_dir: PathBuf,
    pub out_file: PathBuf,
}

impl FakeServer {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let bin_dir = root.path().join("bin");
        fs::create_dir(&bin_dir).unwrap();
        fs::write(
            bin_dir.join("run"),
            "echo \"$@\" > \"$FAKE_OUT\"\necho \"$DATA_DIR\" >> \"$FAKE_OUT\"\nexit ${FAKE_EXIT:-0}\n",
        )
        .unwrap();

        let out_file = root.path().join("out.txt");
        Self { root, bin_dir, out_file }
    }

    /// Scratch path for a data directory that does not exist yet.
    pub fn data_path(&self, rel: &str) -> PathBuf {
        self.root.path().join("data").join(rel)
    }

    /// Launcher command with a clean, fully controlled environment.
    pub fn launcher(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bootstrap-launcher"));
        cmd.current_dir(&self.bin_dir)
            .env_clear()
            .env("PATH", std::env::var_os("PATH").unwrap_or_default())
            .env("LAUNCHER_SERVER_BIN", "sh")
            .env("FAKE_OUT", &self.out_file)
            .env("RUST_LOG", "bootstrap_launcher=debug");
        cmd
    }

    /// Lines written by the fake server: arguments, then `DATA_DIR`.
    pub fn recorded(&self) -> Option<(String, String)> {
        let text = fs::read_to_string(&self.out_file).ok()?;
        let mut lines = text.lines();
        let args = lines.next()?.to_string();
        let data_dir = lines.next().unwrap_or_default().to_string();
        Some((args, data_dir))
    }
}

pub fn run(cmd: &mut Command) -> Output {
    cmd.output().unwrap()
}

#[allow(dead_code)]
pub fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).map(|mut d| d.next().is_none()).unwrap_or(false)
}
