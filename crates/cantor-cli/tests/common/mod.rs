//! Common test utilities for CLI testing.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with a temporary project directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the project directory
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write `.cantor/config.yaml`
    #[allow(dead_code)]
    pub fn with_config(self, config: &str) -> Self {
        self.write(".cantor/config.yaml", config);
        self
    }

    /// Create a command running in this project directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cantor").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("CANTOR_CONFIG")
            .env_remove("CANTOR_URLS")
            .env_remove("CANTOR_LOG_LEVEL")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1"); // Disable colors for predictable output
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
