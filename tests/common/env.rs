//! Test environment builder for isolated Cinch testing.
//!
//! Provides `TestEnv` - a temp project directory with a css/ tree, plus
//! helpers to run the cinch binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a cinch CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory for one test.
pub struct TestEnv {
    /// Temporary directory acting as the project root
    pub root: TempDir,
}

impl TestEnv {
    /// Create an empty project (no css/ directory yet)
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create project temp dir"),
        }
    }

    /// Get path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the project root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the bundle manifest at the default location
    pub fn write_manifest(&self, content: &str) {
        self.write_file("css/app.bundle.css", content);
    }

    /// Write a CSS source file under css/
    pub fn write_css(&self, name: &str, content: &str) {
        self.write_file(&format!("css/{}", name), content);
    }

    /// Read the minified output at the default location
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.path("css/app.bundle.min.css"))
            .expect("Failed to read minified output")
    }

    /// Run cinch in this environment from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run cinch from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    /// Run cinch from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_cinch");

        let mut cmd = Command::new(bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("CINCH_MANIFEST")
            .env_remove("CINCH_OUTPUT")
            .env_remove("CINCH_ATOMIC_WRITES");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cinch");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_writes_manifest_and_sources() {
        let env = TestEnv::new();
        env.write_manifest("@import url('base.css');\n");
        env.write_css("base.css", "a{}");

        assert!(env.path("css/app.bundle.css").exists());
        assert!(env.path("css/base.css").exists());
    }
}
