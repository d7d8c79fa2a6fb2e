//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "onc")]
#[command(author, version, about = "Scaffold and run PocketBase + Astro projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Verbose output (echo the external commands being run)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the container name derived from the project directory
    #[arg(long, global = true, env = "ONC_CONTAINER_NAME")]
    pub container_name: Option<String>,

    /// Port the Astro dev server runs on (3000 in older projects)
    #[arg(long, global = true, env = "ONC_FRONTEND_PORT", default_value_t = 4321)]
    pub frontend_port: u16,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Create a new project
    New {
        /// Name of the project directory to create
        name: String,
    },

    /// Start the development environment (PocketBase + Astro hints)
    Start,

    /// PocketBase container lifecycle
    Pb {
        #[command(subcommand)]
        command: PbCommand,
    },

    /// Container runtime passthrough
    Docker {
        #[command(subcommand)]
        command: DockerCommand,
    },

    /// Database shortcuts
    Db {
        #[command(subcommand)]
        command: DbCommand,
    },

    /// Deploy the backend to fly.io
    Deploy,

    /// Upgrade onc to the latest published release
    Upgrade,

    /// Show the current version and whether an update is available
    Version,
}

#[derive(Subcommand)]
pub enum PbCommand {
    /// First-time setup: build the backend image
    Setup,

    /// Start PocketBase (port-guarded; safe to repeat)
    Start,

    /// Stop PocketBase
    Stop,

    /// Remove the container, optionally the image and data
    Cleanup {
        /// Also remove the built image
        #[arg(long)]
        all: bool,

        /// Also purge the persisted data directory
        #[arg(long)]
        data: bool,
    },

    /// Show PocketBase logs
    Logs {
        /// Keep streaming until interrupted
        #[arg(short, long)]
        follow: bool,
    },
}

#[derive(Subcommand)]
pub enum DockerCommand {
    /// Build the backend image
    Build,

    /// Start the container (create it if needed)
    Up,

    /// Stop the container
    Down,

    /// Show container logs
    Logs {
        /// Keep streaming until interrupted
        #[arg(short, long)]
        follow: bool,
    },

    /// Open an interactive shell inside the running container
    Shell,
}

#[derive(Subcommand)]
pub enum DbCommand {
    /// Open the PocketBase Admin UI in a browser
    Studio,

    /// Snapshot the database inside the container
    Backup,

    /// Create an empty migration file
    Migrate,
}
