//! Error types for onc

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OncError {
    #[error("{tool} is not installed")]
    ToolMissing { tool: String, install: String },

    #[error("Port {port} is already in use by process {pid}")]
    PortConflict { port: u16, pid: u32 },

    #[error("Container name '{name}' is already in use")]
    NameConflict { name: String },

    #[error("Port conflict detected")]
    RuntimePortConflict,

    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("Project directory '{0}' already exists")]
    ProjectExists(String),

    #[error("Container not found. Is it running?")]
    ContainerNotFound,

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OncError>;
