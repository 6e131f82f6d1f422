//! CLI command implementations
//!
//! Startup sequence for `start`:
//! 1. Configuration load (file, then flag overrides)
//! 2. Storage initialization (directory + empty data file, idempotent)
//! 3. Tracing setup for HTTP request spans
//! 4. Bind and serve until Ctrl-C

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServer;
use crate::observability::{log_event, Event, Logger};
use crate::store::JsonFileStore;
use crate::submission::SubmissionHandler;

use super::args::{Command, ConfigArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, host, port } => start(&config, host, port),
    }
}

/// Open (and if needed create) the store named by the configuration
pub fn open_store(config: &Config) -> CliResult<JsonFileStore> {
    Ok(JsonFileStore::open(&config.data_dir, &config.data_file)?)
}

/// Prepare the data directory and data file without serving
pub fn init(args: &ConfigArgs) -> CliResult<()> {
    let config = Config::from_args(args)?;
    let store = open_store(&config)?;

    write_response(json!({
        "initialized": true,
        "data_file": store.path().display().to_string(),
    }))
}

/// Start the HTTP API server
pub fn start(args: &ConfigArgs, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::from_args(args)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    Logger::info(
        Event::ConfigLoaded,
        &[("config", &args.config.display().to_string())],
    );

    let store = open_store(&config)?;
    init_tracing();

    let cors = if config.server.cors_allows_any() {
        "any origin".to_string()
    } else {
        config.server.cors_origins.join(",")
    };
    Logger::info(
        Event::ServerStarting,
        &[
            ("addr", &config.server.socket_addr()),
            ("cors", &cors),
            ("data_file", &store.path().display().to_string()),
        ],
    );

    let handler = SubmissionHandler::new(Arc::new(store));
    let server = HttpServer::new(config.server, handler);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io_error(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start(shutdown_signal()))
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        log_event(Event::ShutdownStart);
    }
}
