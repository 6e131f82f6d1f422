//! CLI module for the collector
//!
//! Provides command-line interface for:
//! - init: Create the data directory and empty data file
//! - start: Initialize storage and serve the HTTP API

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{init, open_store, run, run_command, start};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
