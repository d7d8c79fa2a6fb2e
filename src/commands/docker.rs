//! `onc docker` - container runtime passthrough
//!
//! Thin access to the same lifecycle the pb command drives, without the
//! port guard or endpoint output. `up` resumes when possible and creates
//! otherwise; a name collision is reported with down/up guidance instead of
//! being resolved automatically.

use crate::cli::DockerCommand;
use crate::error::{OncError, Result};
use crate::output;
use crate::project::ProjectContext;
use crate::runtime::command::CommandRunner;
use crate::runtime::Orchestrator;

pub fn execute<R: CommandRunner>(
    ctx: &ProjectContext,
    runner: &R,
    command: &DockerCommand,
    verbose: bool,
) -> Result<i32> {
    let orch = Orchestrator::new(ctx, runner).verbose(verbose);

    match command {
        DockerCommand::Build => {
            println!("Building Docker image...");
            orch.build()?;
            output::success("Docker image built successfully");
            Ok(0)
        }

        DockerCommand::Up => {
            println!("Starting container...");
            match orch.resume() {
                Ok(_) => {
                    output::success("Container started successfully");
                    Ok(0)
                }
                Err(OncError::NameConflict { .. }) => {
                    output::info("Container already exists. Try:");
                    output::command_hint("onc docker down");
                    output::command_hint("onc docker up");
                    Ok(1)
                }
                Err(e) => Err(e),
            }
        }

        DockerCommand::Down => {
            println!("Stopping container...");
            orch.stop()?;
            output::success("Container stopped successfully");
            Ok(0)
        }

        DockerCommand::Logs { follow } => match logs(&orch, *follow) {
            Err(OncError::ContainerNotFound) => {
                output::fail("Container not found. Is it running?");
                output::remediation("Try starting it first:", &["onc docker up"]);
                Ok(1)
            }
            other => other,
        },

        DockerCommand::Shell => match orch.shell() {
            Ok(code) => {
                if code != 0 {
                    output::fail(&format!("Shell exited with code {}", code));
                }
                Ok(code)
            }
            Err(OncError::ContainerNotFound) => {
                output::fail("Container not found. Is it running?");
                output::remediation("Try starting it first:", &["onc docker up"]);
                Ok(1)
            }
            Err(e) => Err(e),
        },
    }
}

fn logs<R: CommandRunner>(orch: &Orchestrator<R>, follow: bool) -> Result<i32> {
    if follow {
        orch.logs_follow()
    } else {
        print!("{}", orch.logs()?);
        Ok(0)
    }
}
