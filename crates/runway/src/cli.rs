use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "runway",
    version,
    about = "Find runtimes installed by other version managers"
)]
pub struct Cli {
    /// Runway shims directory, excluded when searching PATH for system installs
    #[arg(long, global = true, env = "RUNWAY_SHIMS_DIR", value_name = "DIR")]
    pub shims_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered migration providers
    Providers {
        /// Only providers for this runtime (node, python, ruby)
        #[arg(long)]
        runtime: Option<String>,
    },

    /// Detect versions installed by other version managers
    Detect {
        /// Only providers for this runtime (node, python, ruby)
        #[arg(long)]
        runtime: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how to remove a version installed by a provider
    UninstallHint {
        /// Provider name, as shown by `runway providers`
        provider: String,

        version: String,
    },
}
