//! `onc db` - database shortcuts

use chrono::Local;

use crate::cli::DbCommand;
use crate::error::{OncError, Result};
use crate::output;
use crate::project::ProjectContext;
use crate::runtime::command::CommandRunner;
use crate::runtime::probe;

pub fn execute<R: CommandRunner>(
    ctx: &ProjectContext,
    runner: &R,
    command: &DbCommand,
) -> Result<i32> {
    match command {
        DbCommand::Studio => {
            let url = ctx.admin_url();
            open_in_browser(runner, &url)?;
            output::success("Admin UI opened in browser");
            Ok(0)
        }

        DbCommand::Backup => backup(ctx, runner),

        DbCommand::Migrate => {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let dir = ctx.pb_dir().join("pb_migrations");
            std::fs::create_dir_all(&dir)?;
            let file = dir.join(format!("{}_migration.js", stamp));
            std::fs::write(&file, "// migration_name_here\n")?;
            output::success(&format!("Migration file created: {}", file.display()));
            Ok(0)
        }
    }
}

/// Snapshot data.db inside the running container.
fn backup<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<i32> {
    if !probe::is_running(runner, &ctx.container_name)? {
        output::fail("Container not found. Is it running?");
        output::remediation("Try starting it first:", &["onc pb start"]);
        return Ok(1);
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let target = format!("/pb/pb_data/backup_{}.db", stamp);
    let args = [
        "exec",
        ctx.container_name.as_str(),
        "cp",
        "/pb/pb_data/data.db",
        target.as_str(),
    ];
    let out = runner.run(None, "docker", &args)?;
    if !out.success() {
        return Err(OncError::CommandFailed {
            command: crate::runtime::display_command("docker", &args),
            status: out.status,
            stderr: out.stderr.trim().to_string(),
        });
    }

    output::success(&format!("Database backup created: {}", target));
    Ok(0)
}

fn open_in_browser<R: CommandRunner>(runner: &R, url: &str) -> Result<()> {
    let (program, args): (&str, Vec<&str>) = match std::env::consts::OS {
        "macos" => ("open", vec![url]),
        "windows" => ("cmd", vec!["/C", "start", url]),
        _ => ("xdg-open", vec![url]),
    };
    let out = runner.run(None, program, &args)?;
    if !out.success() {
        return Err(OncError::ExecutionError(format!(
            "Could not open {} in a browser",
            url
        )));
    }
    Ok(())
}
