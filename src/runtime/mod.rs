//! Container lifecycle orchestration for the backend service

pub mod classify;
pub mod command;
pub mod lifecycle;
pub mod probe;

pub use classify::{classify, FailureKind};
pub use command::{display_command, CmdOutput, CommandRunner, SystemRunner};
pub use lifecycle::{
    CleanupOptions, CleanupReport, CleanupStep, Orchestrator, StartOutcome, StepOutcome,
};
pub use probe::{container_state, probe_port, ContainerState, PortProbe};
