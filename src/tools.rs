//! External tool detection
//!
//! onc delegates all real work to external executables. A command declares
//! which tools it needs and the check runs before the action does anything,
//! so a missing tool never interrupts a half-finished lifecycle step.

use crate::error::{OncError, Result};
use crate::runtime::command::CommandRunner;

/// An external executable onc shells out to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Docker,
    Fly,
    Cargo,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Docker => "docker",
            Tool::Fly => "fly",
            Tool::Cargo => "cargo",
        }
    }

    fn probe_args(self) -> &'static [&'static str] {
        match self {
            Tool::Docker | Tool::Cargo => &["--version"],
            Tool::Fly => &["version"],
        }
    }

    pub fn install_guide(self) -> &'static str {
        match self {
            Tool::Docker => {
                "Install Docker Desktop from https://www.docker.com/products/docker-desktop"
            }
            Tool::Fly => "Install the fly CLI with: curl -L https://fly.io/install.sh | sh",
            Tool::Cargo => "Install Rust and cargo from https://rustup.rs",
        }
    }
}

/// Verify that every listed tool responds to its version probe.
pub fn check_required<R: CommandRunner>(runner: &R, tools: &[Tool]) -> Result<()> {
    for tool in tools {
        let ok = runner
            .run(None, tool.name(), tool.probe_args())
            .map(|out| out.success())
            .unwrap_or(false);
        if !ok {
            return Err(OncError::ToolMissing {
                tool: tool.name().to_string(),
                install: tool.install_guide().to_string(),
            });
        }
    }
    Ok(())
}
