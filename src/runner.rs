//! Synchronous external-process invocation.
//!
//! Commands are argument vectors, never shell strings; the rendered command
//! line exists only for logging. The orchestrators depend on the
//! [`ProcessRunner`] trait exclusively, so tests substitute recording stubs.

use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory override; inherited from the process when `None`.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        write!(f, "{}", shell_words::join(words))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    /// Normalized success/failure signal; exit codes are not exposed.
    pub failed: bool,
}

pub trait ProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<RunOutput>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<RunOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }
        let output = cmd
            .output()
            .with_context(|| format!("spawn {}", command.program))?;
        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            failed: !output.status.success(),
        })
    }
}

/// Run a command with the logging contract every invocation gets: the
/// command line at debug, captured stdout at info, and captured stderr at
/// error only when the tool signaled failure.
pub fn run_logged<R: ProcessRunner + ?Sized>(
    runner: &R,
    command: &CommandSpec,
) -> Result<RunOutput> {
    tracing::debug!(command = %command, "running external tool");
    let output = runner.run(command)?;
    if !output.stdout.trim().is_empty() {
        tracing::info!("{}", output.stdout.trim_end());
    }
    if output.failed && !output.stderr.trim().is_empty() {
        tracing::error!("{}", output.stderr.trim_end());
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_command_line_with_quoting() {
        let command = CommandSpec::new("berks")
            .args(["upload", "my cookbook"])
            .arg("--no-freeze");
        assert_eq!(command.to_string(), "berks upload 'my cookbook' --no-freeze");
    }

    #[test]
    fn system_runner_captures_stdout() {
        let command = CommandSpec::new("sh").args(["-c", "echo hello"]);
        let output = SystemRunner.run(&command).expect("run");
        assert!(!output.failed);
        assert_eq!(output.stdout, "hello\n");
    }

    #[test]
    fn system_runner_normalizes_failure() {
        let command = CommandSpec::new("sh").args(["-c", "echo oops >&2; exit 3"]);
        let output = SystemRunner.run(&command).expect("run");
        assert!(output.failed);
        assert_eq!(output.stderr, "oops\n");
    }

    #[test]
    fn system_runner_honors_working_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let command = CommandSpec::new("pwd").current_dir(dir.path());
        let output = SystemRunner.run(&command).expect("run");
        let reported = output.stdout.trim();
        let expected = dir.path().canonicalize().expect("canonicalize");
        assert_eq!(
            std::path::Path::new(reported).canonicalize().expect("canonicalize"),
            expected
        );
    }

    #[test]
    fn spawn_error_propagates() {
        let command = CommandSpec::new("/no/such/binary");
        assert!(SystemRunner.run(&command).is_err());
    }
}
