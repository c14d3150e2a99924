//! Demo client for the weather MCP server.
//!
//! Usage: `weather_client [basic|weather|all]`
//!
//! The server executable is taken from `MCP_SERVER_BIN`, or expected next to
//! this binary.

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use weather_mcp_server::client::{
    SERVER_BIN_ENV, Suite, connect_stdio, list_tool_names, resolve_server_bin, run_checks,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let suite = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Suite>()?,
        None => Suite::default(),
    };

    let current_exe = std::env::current_exe().context("cannot locate the client executable")?;
    let server_bin = resolve_server_bin(std::env::var_os(SERVER_BIN_ENV), &current_exe);

    info!("Starting client checks ({:?})", suite);
    let session = connect_stdio(&server_bin).await?;

    let outcome = async {
        let tools = list_tool_names(session.peer()).await?;
        info!("Connected to server with tools: {:?}", tools);
        run_checks(session.peer(), suite).await
    }
    .await;

    info!("Cleaning up resources...");
    session.cancel().await.context("failed to shut down the session")?;

    match &outcome {
        Ok(()) => info!("Client checks completed successfully"),
        Err(e) => error!("Client checks failed: {:#}", e),
    }
    outcome
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
