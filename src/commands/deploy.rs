//! `onc deploy` - deploy the backend via the fly CLI

use crate::error::Result;
use crate::output;
use crate::project::ProjectContext;
use crate::runtime::command::CommandRunner;

pub fn execute<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<i32> {
    println!("Deploying to fly.io...\n");

    // fly owns the terminal for build output and prompts; its exit code is
    // the deployment verdict.
    let code = runner.stream(Some(&ctx.pb_dir()), "fly", &["deploy"])?;
    if code == 0 {
        output::success("Deployment complete");
    } else {
        output::fail(&format!("fly deploy exited with code {}", code));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::command::fake::{FakeRunner, Scripted};
    use std::path::Path;

    #[test]
    fn test_deploy_propagates_exit_code() {
        let ctx = ProjectContext::from_dir(Path::new("/tmp/demo")).unwrap();
        let runner = FakeRunner::new().respond("fly deploy", Scripted::fail(2, ""));
        assert_eq!(execute(&ctx, &runner).unwrap(), 2);
    }
}
