//! onc - scaffold and run PocketBase + Astro projects
//!
//! onc pairs a static-site frontend (Astro) with a containerized backend
//! data service (PocketBase) and drives the local lifecycle of the backend
//! container: build, start, stop, logs, shell, cleanup. All real work is
//! delegated to external tools (docker, fly, cargo); onc resolves names,
//! probes state, and composes the invocations.
//!
//! # Example
//!
//! ```no_run
//! use onc::project::ProjectContext;
//! use onc::runtime::{Orchestrator, SystemRunner};
//!
//! let ctx = ProjectContext::resolve().unwrap();
//! let runner = SystemRunner;
//! let orch = Orchestrator::new(&ctx, &runner);
//! orch.start_service().unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod project;
pub mod registry;
pub mod runtime;
pub mod templates;
pub mod tools;

pub use error::{OncError, Result};
pub use project::ProjectContext;
pub use runtime::{
    CleanupOptions, CleanupReport, ContainerState, Orchestrator, StartOutcome, SystemRunner,
};
