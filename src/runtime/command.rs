//! Typed execution of external commands
//!
//! The container runtime only talks back through exit codes and free text,
//! so every invocation is captured into a [`CmdOutput`] instead of being
//! surfaced as a bare error string. Lifecycle code goes through the
//! [`CommandRunner`] trait so tests can substitute a recording fake and
//! assert which runtime commands were (or were not) issued.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{OncError, Result};

/// Captured result of one external command
#[derive(Debug, Clone)]
pub struct CmdOutput {
    /// Exit status (-1 when the process was killed by a signal)
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Stdout with surrounding whitespace removed
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Convert a failed invocation into a [`OncError::CommandFailed`]
    pub fn into_result(self, command: &str) -> Result<CmdOutput> {
        if self.success() {
            Ok(self)
        } else {
            Err(OncError::CommandFailed {
                command: command.to_string(),
                status: self.status,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Executes external commands on behalf of the orchestrator
pub trait CommandRunner {
    /// Run to completion with captured stdout/stderr.
    fn run(&self, cwd: Option<&Path>, program: &str, args: &[&str]) -> Result<CmdOutput>;

    /// Run with inherited stdio (interactive shells, `logs --follow`),
    /// returning the child's exit code.
    fn stream(&self, cwd: Option<&Path>, program: &str, args: &[&str]) -> Result<i32>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cwd: Option<&Path>, program: &str, args: &[&str]) -> Result<CmdOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let output = cmd.output()?;

        Ok(CmdOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn stream(&self, cwd: Option<&Path>, program: &str, args: &[&str]) -> Result<i32> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let status = cmd.status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Render a command line for verbose output and error messages
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        if arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command_quotes_spaces() {
        assert_eq!(
            display_command("docker", &["ps", "--format", "{{.Names}}"]),
            "docker ps --format {{.Names}}"
        );
        assert_eq!(
            display_command("sh", &["-c", "echo hi"]),
            "sh -c \"echo hi\""
        );
    }

    #[test]
    fn test_cmd_output_into_result() {
        let ok = CmdOutput {
            status: 0,
            stdout: "x\n".into(),
            stderr: String::new(),
        };
        assert_eq!(ok.into_result("docker ps").unwrap().stdout_trimmed(), "x");

        let err = CmdOutput {
            status: 125,
            stdout: String::new(),
            stderr: "boom\n".into(),
        };
        match err.into_result("docker run") {
            Err(OncError::CommandFailed {
                command, status, ..
            }) => {
                assert_eq!(command, "docker run");
                assert_eq!(status, 125);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_system_runner_captures_output() {
        let runner = SystemRunner;
        let out = runner.run(None, "echo", &["hello"]).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout_trimmed(), "hello");
    }
}
