//! CLI argument definitions using clap
//!
//! Commands:
//! - collector init --config <path>
//! - collector start --config <path> [--host H] [--port P]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Collector - offline data submission API
#[derive(Parser, Debug)]
#[command(name = "collector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to configuration file (missing file means defaults)
    #[arg(long, default_value = "./collector.json")]
    pub config: PathBuf,

    /// Directory holding the data file (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and an empty data file
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Start the HTTP API server
    Start {
        #[command(flatten)]
        config: ConfigArgs,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
