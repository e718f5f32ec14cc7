//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] runs the binary inside its own temporary directory with
//! `HOME` pointed there as well, so no user or project configuration leaks
//! into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that change how sftree behaves.
const SFTREE_VARS: &[&str] = &[
    "SFTREE_CONFIG",
    "SFTREE_LOG_MODE",
    "SFTREE_MAX_PATH_LEN",
    "SFTREE_MAX_NAME_LEN",
    "SFTREE_INCLUDE_HIDDEN",
    "SFTREE_DIRECTORY_MODE",
    "SFTREE_MAX_DEPTH",
];

/// Isolated working directory for one test.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Command for the sftree binary, run from the temp directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sftree").expect("Failed to find sftree binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in SFTREE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a directory (and parents) under the temp directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file under the temp directory.
    pub fn create_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Absolute path under the temp directory as a string.
    pub fn path_str(&self, relative: &str) -> String {
        self.temp_path.join(relative).display().to_string()
    }
}
