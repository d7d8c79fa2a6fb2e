//! State probes against the container runtime and the host
//!
//! State is never cached: every probe goes back to `docker` or the OS so an
//! action always decides on what is true right now, not on what was true at
//! the start of the invocation.

use sysinfo::{Pid, System};

use crate::error::Result;
use crate::runtime::command::CommandRunner;

/// Observed state of the project's container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// No container with the resolved name exists
    Absent,
    /// A container exists but is not running
    StoppedExists,
    /// The container is up
    Running,
}

/// Result of probing one host TCP port
#[derive(Debug, Clone)]
pub struct PortProbe {
    pub port: u16,
    pub available: bool,
    /// Pid of the listener, when one could be identified
    pub occupying_pid: Option<u32>,
}

/// Whether a container with `name` is currently running.
pub fn is_running<R: CommandRunner>(runner: &R, name: &str) -> Result<bool> {
    list_contains(runner, name, false)
}

/// Whether a container with `name` exists, running or stopped.
pub fn exists<R: CommandRunner>(runner: &R, name: &str) -> Result<bool> {
    list_contains(runner, name, true)
}

/// Probe the full container state in one call.
pub fn container_state<R: CommandRunner>(runner: &R, name: &str) -> Result<ContainerState> {
    if is_running(runner, name)? {
        Ok(ContainerState::Running)
    } else if exists(runner, name)? {
        Ok(ContainerState::StoppedExists)
    } else {
        Ok(ContainerState::Absent)
    }
}

fn list_contains<R: CommandRunner>(runner: &R, name: &str, include_stopped: bool) -> Result<bool> {
    let filter = format!("name={}", name);
    let mut args: Vec<&str> = vec!["ps"];
    if include_stopped {
        args.push("-a");
    }
    args.extend(["--filter", filter.as_str(), "--format", "{{.Names}}"]);

    let out = runner.run(None, "docker", &args)?;
    if !out.success() {
        // A probe that cannot reach the daemon reports "not there"; the
        // action that follows will surface the real failure.
        return Ok(false);
    }

    // The name filter is a substring match, so compare lines exactly.
    Ok(out.stdout.lines().any(|line| line.trim() == name))
}

/// Probe whether `port` has a listener, via `lsof`.
///
/// `lsof` exits non-zero when nothing matches, and may be absent entirely;
/// both count as available.
pub fn probe_port<R: CommandRunner>(runner: &R, port: u16) -> Result<PortProbe> {
    let spec = format!(":{}", port);
    let out = match runner.run(None, "lsof", &["-t", "-i", &spec]) {
        Ok(out) => out,
        Err(_) => {
            return Ok(PortProbe {
                port,
                available: true,
                occupying_pid: None,
            })
        }
    };

    if !out.success() || out.stdout_trimmed().is_empty() {
        return Ok(PortProbe {
            port,
            available: true,
            occupying_pid: None,
        });
    }

    let pid = out
        .stdout_trimmed()
        .lines()
        .next()
        .and_then(|line| line.trim().parse::<u32>().ok());

    Ok(PortProbe {
        port,
        available: false,
        occupying_pid: pid,
    })
}

/// Resolve a pid to a process name for friendlier conflict messages.
pub fn process_name(pid: u32) -> Option<String> {
    let mut sys = System::new();
    sys.refresh_processes();
    sys.process(Pid::from_u32(pid))
        .map(|p| p.name().to_string())
}
