//! onc CLI - scaffold and run PocketBase + Astro projects

use clap::Parser;
use colored::Colorize;

use onc::cli::{Args, DbCommand, SubCommand};
use onc::runtime::SystemRunner;
use onc::tools::{self, Tool};
use onc::{commands, OncError, ProjectContext};

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            if let OncError::ToolMissing { install, .. } = &e {
                println!("\nTo install:");
                println!("  {}", install.blue());
                println!("\nThen try again.");
            }
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> onc::Result<i32> {
    let runner = SystemRunner;

    match &args.command {
        SubCommand::New { name } => commands::new::execute(name),

        SubCommand::Start => {
            tools::check_required(&runner, &[Tool::Docker])?;
            let ctx = project_context(&args)?;
            commands::start::execute(&ctx, &runner, args.verbose)
        }

        SubCommand::Pb { command } => {
            tools::check_required(&runner, &[Tool::Docker])?;
            let ctx = project_context(&args)?;
            commands::pb::execute(&ctx, &runner, command, args.verbose)
        }

        SubCommand::Docker { command } => {
            tools::check_required(&runner, &[Tool::Docker])?;
            let ctx = project_context(&args)?;
            commands::docker::execute(&ctx, &runner, command, args.verbose)
        }

        SubCommand::Db { command } => {
            if matches!(command, DbCommand::Backup) {
                tools::check_required(&runner, &[Tool::Docker])?;
            }
            let ctx = project_context(&args)?;
            commands::db::execute(&ctx, &runner, command)
        }

        SubCommand::Deploy => {
            tools::check_required(&runner, &[Tool::Docker, Tool::Fly])?;
            let ctx = project_context(&args)?;
            commands::deploy::execute(&ctx, &runner)
        }

        SubCommand::Upgrade => {
            tools::check_required(&runner, &[Tool::Cargo])?;
            commands::upgrade::execute(&runner)
        }

        SubCommand::Version => commands::version::execute(),
    }
}

fn project_context(args: &Args) -> onc::Result<ProjectContext> {
    let mut ctx = match &args.container_name {
        Some(name) => ProjectContext::with_container_name(&std::env::current_dir()?, name)?,
        None => ProjectContext::resolve()?,
    };
    ctx.frontend_port = args.frontend_port;
    Ok(ctx)
}
