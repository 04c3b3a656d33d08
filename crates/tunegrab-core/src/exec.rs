//! Synchronous external command execution.
//!
//! Both pipelines shell out to external tools (the downloader and the media
//! tool). All invocations go through [`CommandRunner`] so the orchestration
//! code can be exercised in tests without either tool installed.

use std::io;
use std::process::Command;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Human-readable status for error messages.
    pub fn status_label(&self) -> String {
        match self.status {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Blocking runner for external commands. One real implementation
/// ([`SystemRunner`]); tests substitute fakes.
pub trait CommandRunner {
    /// Run to completion with stdout/stderr captured.
    fn run_captured(&self, program: &str, args: &[String]) -> io::Result<ToolOutput>;

    /// Run to completion with stdio inherited from this process, so the
    /// tool's own console output reaches the user. Returns the raw exit code.
    fn run_passthrough(&self, program: &str, args: &[String]) -> io::Result<Option<i32>>;
}

/// Runs commands via `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_captured(&self, program: &str, args: &[String]) -> io::Result<ToolOutput> {
        tracing::debug!(program, ?args, "running (captured)");
        let output = Command::new(program).args(args).output()?;
        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_passthrough(&self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        tracing::debug!(program, ?args, "running (passthrough)");
        let status = Command::new(program).args(args).status()?;
        Ok(status.code())
    }
}
