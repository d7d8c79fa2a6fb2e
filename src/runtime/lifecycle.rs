//! Container lifecycle orchestration
//!
//! Drives the external container runtime through the states needed to serve
//! the backend locally: `Absent -> StoppedExists -> Running`, with cleanup
//! able to return any state to `Absent`. Every action re-probes state before
//! mutating, and a start never touches the runtime while the backend port is
//! known to be taken (probe before mutate).

use std::fs;
use std::path::Path;

use crate::error::{OncError, Result};
use crate::project::{ProjectContext, BACKEND_PORT};
use crate::runtime::classify::{classify, FailureKind};
use crate::runtime::command::{display_command, CmdOutput, CommandRunner};
use crate::runtime::probe::{self, ContainerState};

/// How a successful start was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Already running; nothing was done
    AlreadyRunning,
    /// An existing stopped container was resumed
    Resumed,
    /// A fresh container was created and started
    Created,
}

/// Optional extra removals during cleanup; the flags are additive
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupOptions {
    /// Also remove the built image
    pub all: bool,
    /// Also purge the persisted data directory
    pub data: bool,
}

/// Result of one cleanup sub-step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did its work
    Done,
    /// Nothing to do; the target was already gone
    AlreadyAbsent,
    /// The step failed but cleanup carried on
    Failed(String),
}

/// One named sub-step of a cleanup run
#[derive(Debug, Clone)]
pub struct CleanupStep {
    pub name: &'static str,
    pub outcome: StepOutcome,
}

/// Per-step summary of a cleanup run.
///
/// Cleanup as a whole always succeeds; this records which steps actually
/// removed something, which were no-ops, and which failed.
#[derive(Debug, Clone, Default)]
pub struct CleanupReport {
    pub steps: Vec<CleanupStep>,
}

impl CleanupReport {
    fn push(&mut self, name: &'static str, outcome: StepOutcome) {
        self.steps.push(CleanupStep { name, outcome });
    }
}

/// Orchestrates the project's backend container through an external runner
pub struct Orchestrator<'a, R: CommandRunner> {
    ctx: &'a ProjectContext,
    runner: &'a R,
    verbose: bool,
}

impl<'a, R: CommandRunner> Orchestrator<'a, R> {
    pub fn new(ctx: &'a ProjectContext, runner: &'a R) -> Self {
        Self {
            ctx,
            runner,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn docker(&self, args: &[&str]) -> Result<CmdOutput> {
        if self.verbose {
            println!("> {}", display_command("docker", args));
        }
        self.runner.run(None, "docker", args)
    }

    /// Probe the current container state. Never cached.
    pub fn state(&self) -> Result<ContainerState> {
        probe::container_state(self.runner, &self.ctx.container_name)
    }

    /// Build (or rebuild) the backend image from `apps/pb`.
    ///
    /// Build failures are fatal and surfaced verbatim.
    pub fn build(&self) -> Result<()> {
        let pb_dir = self.ctx.pb_dir();
        let context = pb_dir.to_string_lossy();
        let args: [&str; 4] = ["build", "-t", self.ctx.container_name.as_str(), &context];
        let out = self.docker(&args)?;
        out.into_result(&display_command("docker", &args))?;
        Ok(())
    }

    /// Create and start a fresh container (`Absent -> Running`).
    pub fn run(&self) -> Result<()> {
        let pb_dir = self.ctx.pb_dir();
        let port = format!("{0}:{0}", BACKEND_PORT);
        let data = format!("{}:/pb/pb_data", pb_dir.join("pb_data").display());
        let migrations = format!("{}:/pb/pb_migrations", pb_dir.join("pb_migrations").display());
        let hooks = format!("{}:/pb/pb_hooks", pb_dir.join("pb_hooks").display());
        let name = self.ctx.container_name.as_str();

        let args: [&str; 13] = [
            "run", "--name", name, "-d", "-p", &port, "-v", &data, "-v", &migrations, "-v",
            &hooks, name,
        ];
        let out = self.docker(&args)?;
        if out.success() {
            return Ok(());
        }

        match classify(&out.stderr) {
            FailureKind::NameInUse => Err(OncError::NameConflict {
                name: name.to_string(),
            }),
            FailureKind::PortAllocated => Err(OncError::RuntimePortConflict),
            _ => Err(OncError::CommandFailed {
                command: display_command("docker", &args),
                status: out.status,
                stderr: out.stderr.trim().to_string(),
            }),
        }
    }

    /// Resume an existing stopped container (`StoppedExists -> Running`).
    ///
    /// Falls back to [`Orchestrator::run`] when the runtime reports the
    /// container missing; any other failure escalates.
    pub fn resume(&self) -> Result<StartOutcome> {
        let name = self.ctx.container_name.as_str();
        let args = ["start", name];
        let out = self.docker(&args)?;
        if out.success() {
            return Ok(StartOutcome::Resumed);
        }

        match classify(&out.stderr) {
            FailureKind::NoSuchContainer => {
                self.run()?;
                Ok(StartOutcome::Created)
            }
            _ => Err(OncError::CommandFailed {
                command: display_command("docker", &args),
                status: out.status,
                stderr: out.stderr.trim().to_string(),
            }),
        }
    }

    /// Port-guarded, idempotent start.
    ///
    /// Order matters: the port probe runs first, and an occupied port aborts
    /// before any runtime-mutating command is issued. Starting while already
    /// running is a no-op success.
    pub fn start_service(&self) -> Result<StartOutcome> {
        let probe = probe::probe_port(self.runner, BACKEND_PORT)?;
        if !probe.available {
            // The backend itself may be the listener; already-running is a
            // no-op success, not a conflict.
            if self.state()? == ContainerState::Running {
                return Ok(StartOutcome::AlreadyRunning);
            }
            return Err(OncError::PortConflict {
                port: BACKEND_PORT,
                pid: probe.occupying_pid.unwrap_or(0),
            });
        }

        match self.state()? {
            ContainerState::Running => Ok(StartOutcome::AlreadyRunning),
            ContainerState::StoppedExists => self.resume(),
            ContainerState::Absent => {
                self.run()?;
                Ok(StartOutcome::Created)
            }
        }
    }

    /// Stop the container. Best-effort: a container that is already stopped
    /// or absent is treated as success.
    pub fn stop(&self) -> Result<()> {
        let name = self.ctx.container_name.as_str();
        let _ = self.docker(&["stop", name])?;
        Ok(())
    }

    /// Remove the stopped container. Best-effort like [`Orchestrator::stop`].
    pub fn remove(&self) -> Result<()> {
        let name = self.ctx.container_name.as_str();
        let _ = self.docker(&["rm", name])?;
        Ok(())
    }

    /// Tear everything down: stop and remove the container, plus the image
    /// (`--all`) and the data directory (`--data`) when asked.
    ///
    /// Every sub-step is best-effort and independently recorded; repeated
    /// cleanups are safe.
    pub fn cleanup(&self, opts: CleanupOptions) -> Result<CleanupReport> {
        let name = self.ctx.container_name.as_str();
        let mut report = CleanupReport::default();

        report.push("Stopped container", self.best_effort(&["stop", name])?);
        report.push("Removed container", self.best_effort(&["rm", name])?);

        if opts.all {
            report.push("Removed image", self.best_effort(&["rmi", name])?);
        }
        if opts.data {
            report.push("Removed data", purge_dir(&self.ctx.pb_data_dir()));
        }

        Ok(report)
    }

    fn best_effort(&self, args: &[&str]) -> Result<StepOutcome> {
        let out = self.docker(args)?;
        if out.success() {
            return Ok(StepOutcome::Done);
        }
        match classify(&out.stderr) {
            FailureKind::NoSuchContainer | FailureKind::NoSuchImage => {
                Ok(StepOutcome::AlreadyAbsent)
            }
            _ => Ok(StepOutcome::Failed(out.stderr.trim().to_string())),
        }
    }

    /// Fetch the full log output in one shot.
    pub fn logs(&self) -> Result<String> {
        self.require_existing()?;
        let name = self.ctx.container_name.as_str();
        let args = ["logs", name];
        let out = self.docker(&args)?;
        let out = out.into_result(&display_command("docker", &args))?;
        Ok(out.stdout)
    }

    /// Stream logs to the caller's terminal until the child exits or the
    /// caller is killed. Returns the child's exit code.
    pub fn logs_follow(&self) -> Result<i32> {
        self.require_existing()?;
        let name = self.ctx.container_name.as_str();
        self.runner.stream(None, "docker", &["logs", "-f", name])
    }

    /// Open an interactive shell inside the running container, with the
    /// caller's terminal inherited. Returns the shell's exit code.
    pub fn shell(&self) -> Result<i32> {
        if !probe::is_running(self.runner, &self.ctx.container_name)? {
            return Err(OncError::ContainerNotFound);
        }
        let name = self.ctx.container_name.as_str();
        self.runner
            .stream(None, "docker", &["exec", "-it", name, "sh"])
    }

    fn require_existing(&self) -> Result<()> {
        if !probe::exists(self.runner, &self.ctx.container_name)? {
            return Err(OncError::ContainerNotFound);
        }
        Ok(())
    }
}

/// Empty a data directory, keeping the directory itself.
fn purge_dir(dir: &Path) -> StepOutcome {
    if !dir.exists() {
        return StepOutcome::AlreadyAbsent;
    }
    match fs::remove_dir_all(dir).and_then(|_| fs::create_dir_all(dir)) {
        Ok(()) => StepOutcome::Done,
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}
