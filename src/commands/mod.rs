//! Command handlers
//!
//! One module per top-level subcommand. Handlers return the process exit
//! code; conflicts with a known remediation print their guidance here and
//! exit 1, anything unexpected bubbles up as an error for `main` to report.

pub mod db;
pub mod deploy;
pub mod docker;
pub mod new;
pub mod pb;
pub mod start;
pub mod upgrade;
pub mod version;
