//! Terminal output helpers
//!
//! The terminal is onc's only surface: successes in green, failures in red
//! on stderr, and remediation commands in blue so they are easy to pick out
//! and copy.

use colored::Colorize;

use crate::project::ProjectContext;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "!".yellow(), msg);
}

pub fn fail(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// A copy-pasteable command, indented under whatever preceded it
pub fn command_hint(cmd: &str) {
    println!("  {}", cmd.blue());
}

/// An intro line followed by one or more remediation commands
pub fn remediation(intro: &str, commands: &[&str]) {
    println!("\n{}", intro.yellow());
    for cmd in commands {
        command_hint(cmd);
    }
}

/// The local backend endpoints, printed after a successful start
pub fn backend_endpoints(ctx: &ProjectContext) {
    println!("\nAvailable at:");
    println!("  {}", ctx.backend_url().green());
    println!("  {} (Admin UI)", ctx.admin_url().green());
}

/// All dev-environment endpoints, including the frontend
pub fn dev_endpoints(ctx: &ProjectContext) {
    println!("\nAvailable endpoints:");
    println!("PocketBase:  {}", ctx.backend_url().green());
    println!("Admin UI:    {}", ctx.admin_url().green());
    println!("Astro:       {}", ctx.frontend_url().green());
}
