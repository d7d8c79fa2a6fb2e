//! `onc version` - version and update hint

use colored::Colorize;

use crate::error::Result;
use crate::registry;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute() -> Result<i32> {
    println!("onc version {}", CURRENT_VERSION.green());

    // Registry failures stay silent; the version itself already printed.
    if let Some(latest) = registry::latest_onc_version() {
        if latest != CURRENT_VERSION {
            println!(
                "\n{} {}",
                "Update available!".yellow(),
                format!("{} → {}", CURRENT_VERSION, latest).dimmed()
            );
            println!("Run {} to update", "onc upgrade".blue());
        }
    }

    Ok(0)
}
