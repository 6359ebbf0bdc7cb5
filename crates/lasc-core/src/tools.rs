//! External tool invocation for the scaffold pipeline.
//!
//! The pipeline drives the Go toolchain (`go mod init`, `go fmt`, `go mod
//! tidy`, `go mod download`) as opaque subprocesses: a tool either succeeds
//! or the run stops. Stdout is never parsed; stderr is captured only to make
//! the failure message useful.
//!
//! [`ToolRunner`] is the seam that lets the pipeline's sequencing logic be
//! tested without spawning real processes.

use std::path::Path;
use std::process::Command;

use async_trait::async_trait;

use crate::error::{LascError, Result};

/// Information about a missing prerequisite tool.
#[derive(Debug, Clone)]
pub struct PrerequisiteError {
    pub tool_name: String,
    pub install_instructions: String,
}

/// Runs external build tools in a working directory.
///
/// Implementations report success or failure only. The production
/// implementation is [`ProcessRunner`]; tests substitute recording fakes.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args`, using `dir` as the working directory.
    async fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()>;
}

/// [`ToolRunner`] backed by real subprocesses.
pub struct ProcessRunner;

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        tracing::debug!(dir = %dir.display(), "running {program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()?;

        if !output.status.success() {
            return Err(LascError::ToolFailed {
                command: format!("{program} {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }
}

/// Check that the Go toolchain is installed.
///
/// The pipeline can still be attempted without it; each tool step will then
/// fail with its own command error. Callers surface this as a warning.
pub fn check_prerequisites() -> std::result::Result<(), PrerequisiteError> {
    which::which("go").map_err(|_| PrerequisiteError {
        tool_name: "go".into(),
        install_instructions: "https://go.dev/dl/".into(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_nonexistent_tool_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProcessRunner
            .run(dir.path(), "this_tool_does_not_exist_xyz", &["--version"])
            .await;
        assert!(result.is_err());
    }
}
