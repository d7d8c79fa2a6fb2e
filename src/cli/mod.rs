//! Command-line interface definition

pub mod args;

pub use args::{Args, DbCommand, DockerCommand, PbCommand, SubCommand};
