//! `onc pb` - PocketBase container lifecycle

use colored::Colorize;

use crate::cli::PbCommand;
use crate::error::{OncError, Result};
use crate::output;
use crate::project::ProjectContext;
use crate::runtime::command::CommandRunner;
use crate::runtime::probe;
use crate::runtime::{CleanupOptions, Orchestrator, StartOutcome, StepOutcome};

pub fn execute<R: CommandRunner>(
    ctx: &ProjectContext,
    runner: &R,
    command: &PbCommand,
    verbose: bool,
) -> Result<i32> {
    let orch = Orchestrator::new(ctx, runner).verbose(verbose);

    match command {
        PbCommand::Setup => {
            println!("Building Docker image...");
            orch.build()?;
            output::success("PocketBase setup completed");
            Ok(0)
        }

        PbCommand::Start => start(ctx, &orch),

        PbCommand::Stop => {
            orch.stop()?;
            output::success("PocketBase stopped");
            Ok(0)
        }

        PbCommand::Cleanup { all, data } => {
            let report = orch.cleanup(CleanupOptions {
                all: *all,
                data: *data,
            })?;

            output::success("PocketBase cleaned up");
            println!("\nCleaned:");
            for step in &report.steps {
                match &step.outcome {
                    StepOutcome::Done => println!("  {} {}", "✓".blue(), step.name),
                    StepOutcome::AlreadyAbsent => {
                        println!("  {} {} (already absent)", "-".blue(), step.name)
                    }
                    StepOutcome::Failed(reason) => {
                        println!("  {} {} failed: {}", "!".yellow(), step.name, reason)
                    }
                }
            }
            Ok(0)
        }

        PbCommand::Logs { follow } => {
            if *follow {
                Ok(orch.logs_follow()?)
            } else {
                print!("{}", orch.logs()?);
                Ok(0)
            }
        }
    }
}

/// Port-guarded, idempotent start with remediation output on conflict.
fn start<R: CommandRunner>(ctx: &ProjectContext, orch: &Orchestrator<R>) -> Result<i32> {
    println!("Starting PocketBase...");

    match orch.start_service() {
        Ok(StartOutcome::AlreadyRunning) => {
            output::info("PocketBase is already running");
            output::backend_endpoints(ctx);
            Ok(0)
        }
        Ok(_) => {
            output::success("PocketBase is running");
            output::backend_endpoints(ctx);
            Ok(0)
        }
        Err(OncError::PortConflict { port, pid }) => {
            let owner = probe::process_name(pid)
                .map(|name| format!(" ({})", name))
                .unwrap_or_default();
            output::fail(&format!(
                "Port {} is already in use by process {}{}",
                port, pid, owner
            ));
            let kill_hint = format!("kill {}  # Stop the process using the port", pid);
            output::remediation(
                "Try these commands to fix:",
                &[
                    kill_hint.as_str(),
                    "onc pb start  # Try starting PocketBase again",
                ],
            );
            Ok(1)
        }
        Err(OncError::RuntimePortConflict) => {
            output::fail("Port conflict detected");
            output::remediation("Try these commands:", &["onc pb stop", "onc pb start"]);
            Ok(1)
        }
        Err(OncError::NameConflict { name }) => {
            output::fail(&format!("Container name '{}' is already in use", name));
            output::remediation("Try these commands:", &["onc pb stop", "onc pb start"]);
            Ok(1)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::command::fake::{FakeRunner, Scripted};
    use std::path::Path;

    fn ctx() -> ProjectContext {
        ProjectContext::from_dir(Path::new("/tmp/demo")).unwrap()
    }

    #[test]
    fn test_port_conflict_exits_one_without_mutation() {
        let ctx = ctx();
        let runner = FakeRunner::new().respond("lsof -t -i :8090", Scripted::ok("4321\n"));

        let code = execute(&ctx, &runner, &PbCommand::Start, false).unwrap();
        assert_eq!(code, 1);
        assert!(!runner.called("docker run"));
        assert!(!runner.called("docker start"));
    }

    #[test]
    fn test_start_twice_stays_successful() {
        let ctx = ctx();
        let runner = FakeRunner::new()
            .respond("lsof -t -i :8090", Scripted::fail(1, ""))
            .respond(
                "docker ps --filter name=demo-pb --format {{.Names}}",
                Scripted::ok(""),
            )
            .respond(
                "docker ps --filter name=demo-pb --format {{.Names}}",
                Scripted::ok("demo-pb\n"),
            );

        assert_eq!(execute(&ctx, &runner, &PbCommand::Start, false).unwrap(), 0);
        assert_eq!(execute(&ctx, &runner, &PbCommand::Start, false).unwrap(), 0);
    }

    #[test]
    fn test_stop_when_absent_is_ok() {
        let ctx = ctx();
        let runner = FakeRunner::new().respond(
            "docker stop demo-pb",
            Scripted::fail(1, "No such container: demo-pb"),
        );
        assert_eq!(execute(&ctx, &runner, &PbCommand::Stop, false).unwrap(), 0);
    }

    #[test]
    fn test_cleanup_twice_is_ok() {
        let ctx = ctx();
        let runner = FakeRunner::new();
        let cmd = PbCommand::Cleanup {
            all: false,
            data: false,
        };
        assert_eq!(execute(&ctx, &runner, &cmd, false).unwrap(), 0);
        assert_eq!(execute(&ctx, &runner, &cmd, false).unwrap(), 0);
        assert!(!runner.called("docker rmi"));
    }
}
