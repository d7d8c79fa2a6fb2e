//! `onc upgrade` - self-upgrade via the release registry

use colored::Colorize;

use crate::error::Result;
use crate::output;
use crate::registry;
use crate::runtime::command::CommandRunner;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute<R: CommandRunner>(runner: &R) -> Result<i32> {
    println!("Checking for updates...");

    let latest = match registry::latest_onc_version() {
        Some(v) => v,
        None => {
            output::fail("Could not reach the release registry");
            return Ok(1);
        }
    };

    if latest == CURRENT_VERSION {
        output::success("Already using the latest version!");
        return Ok(0);
    }

    println!(
        "Upgrading from {} to {}...",
        CURRENT_VERSION.yellow(),
        latest.green()
    );
    let code = runner.stream(None, "cargo", &["install", "onc", "--force"])?;
    if code == 0 {
        output::success(&format!("Successfully upgraded onc to {}", latest));
    } else {
        output::fail(&format!("cargo install exited with code {}", code));
    }
    Ok(code)
}
