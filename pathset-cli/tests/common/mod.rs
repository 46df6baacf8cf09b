//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a private temporary directory with all
//! `PATHSET_*` variables removed, so neither the developer's environment
//! nor a stray `pathset.yaml` can leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PATHSET_VARS: [&str; 6] = [
    "PATHSET_BASE_DIR",
    "PATHSET_EXPAND_TILDE",
    "PATHSET_ALLOW_FILE_URIS",
    "PATHSET_SCRIPT_EXTENSIONS",
    "PATHSET_DISPLAY_NAME",
    "PATHSET_LOG_MODE",
];

/// Test environment rooted in a temporary directory.
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

    /// A command running in the temp directory with a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathset").expect("Failed to find pathset binary");
        cmd.current_dir(&self.temp_path);
        for var in PATHSET_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command resolving against the temp directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--base-dir").arg(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory and return its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with `contents` and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Render `relative` under the temp directory as the CLI prints it.
    pub fn expected(&self, relative: &str) -> String {
        self.temp_path.join(relative).display().to_string()
    }
}

/// Stdout of a finished command as lines.
#[allow(dead_code)]
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}
