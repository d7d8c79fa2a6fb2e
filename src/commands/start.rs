//! `onc start` - bring up the development environment
//!
//! Starts the backend container through the same port-guarded path as
//! `onc pb start`, then points at the Astro dev server instead of trying to
//! control a second terminal.

use crate::error::Result;
use crate::output;
use crate::project::ProjectContext;
use crate::runtime::command::CommandRunner;

use super::pb;
use crate::cli::PbCommand;

pub fn execute<R: CommandRunner>(ctx: &ProjectContext, runner: &R, verbose: bool) -> Result<i32> {
    println!("Starting development environment...");

    let code = pb::execute(ctx, runner, &PbCommand::Start, verbose)?;
    if code != 0 {
        return Ok(code);
    }

    println!("\nStart the Astro dev server in another terminal:");
    output::command_hint("cd apps/web && npm run dev");
    output::dev_endpoints(ctx);
    Ok(0)
}
