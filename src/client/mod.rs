//! Demo MCP client.
//!
//! Spawns the server as a child process, talks to it over stdio and runs the
//! scripted checks in [`checks`]. The checks only need a [`ClientPeer`], so
//! they also run against in-process servers.

mod checks;
mod content;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use rmcp::ServiceExt;
use rmcp::model::CallToolRequestParam;
use rmcp::service::{Peer, RoleClient, RunningService};
use rmcp::transport::TokioChildProcess;
use serde_json::{Value, json};
use tokio::process::Command;
use tracing::{debug, info};

pub use checks::{SAMPLE_CITIES, check_basic_tools, check_weather_tools};
pub use content::extract_content;

/// Peer handle used to issue requests to a server.
pub type ClientPeer = Peer<RoleClient>;

/// A running client session.
pub type ClientSession = RunningService<RoleClient, ()>;

/// Limit for a single tool call.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Limit for the whole basic check suite.
pub const BASIC_CHECKS_TIMEOUT: Duration = Duration::from_secs(60);

/// Limit for the whole weather check suite.
pub const WEATHER_CHECKS_TIMEOUT: Duration = Duration::from_secs(120);

/// Environment variable overriding the server executable path.
pub const SERVER_BIN_ENV: &str = "MCP_SERVER_BIN";

/// File name of the server executable built by this package.
pub const SERVER_BIN_NAME: &str = "weather-mcp-server";

/// Which check suites to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suite {
    Basic,
    Weather,
    #[default]
    All,
}

impl Suite {
    pub fn runs_basic(self) -> bool {
        matches!(self, Self::Basic | Self::All)
    }

    pub fn runs_weather(self) -> bool {
        matches!(self, Self::Weather | Self::All)
    }
}

impl FromStr for Suite {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" => Ok(Self::Basic),
            "weather" => Ok(Self::Weather),
            "all" => Ok(Self::All),
            other => Err(anyhow!(
                "unknown suite '{}', expected basic, weather or all",
                other
            )),
        }
    }
}

/// Locate the server executable.
///
/// An explicit override wins; otherwise the server is expected next to the
/// running client executable.
pub fn resolve_server_bin(override_path: Option<OsString>, current_exe: &Path) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let file_name = format!("{}{}", SERVER_BIN_NAME, std::env::consts::EXE_SUFFIX);
    current_exe
        .parent()
        .map(|dir| dir.join(&file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

/// Spawn the server and initialize an MCP session over its stdio.
pub async fn connect_stdio(server_bin: &Path) -> Result<ClientSession> {
    info!("Connecting to server at {}...", server_bin.display());

    let transport = TokioChildProcess::new(Command::new(server_bin))
        .with_context(|| format!("failed to spawn {}", server_bin.display()))?;

    let session = ().serve(transport).await.context("failed to initialize session")?;

    if let Some(info) = session.peer_info() {
        info!(
            "Connected to {} v{}",
            info.server_info.name, info.server_info.version
        );
    }
    Ok(session)
}

/// Names of every tool the server advertises.
pub async fn list_tool_names(peer: &ClientPeer) -> Result<Vec<String>> {
    let tools = peer.list_all_tools().await.context("tools/list failed")?;
    Ok(tools.into_iter().map(|tool| tool.name.to_string()).collect())
}

/// Call a tool with a per-call timeout and return its extracted content.
pub async fn call_tool(peer: &ClientPeer, name: &str, arguments: Value) -> Result<Value> {
    debug!("Calling {} with {}", name, arguments);

    let request: CallToolRequestParam =
        serde_json::from_value(json!({ "name": name, "arguments": arguments }))
            .context("failed to build tool call request")?;

    let result = tokio::time::timeout(CALL_TIMEOUT, peer.call_tool(request))
        .await
        .with_context(|| format!("{} timed out after {:?}", name, CALL_TIMEOUT))?
        .with_context(|| format!("{} call failed", name))?;

    Ok(extract_content(&result))
}

/// Run the selected suites, each under its overall timeout.
pub async fn run_checks(peer: &ClientPeer, suite: Suite) -> Result<()> {
    if suite.runs_basic() {
        tokio::time::timeout(BASIC_CHECKS_TIMEOUT, check_basic_tools(peer))
            .await
            .with_context(|| format!("basic checks timed out after {:?}", BASIC_CHECKS_TIMEOUT))??;
    }

    if suite.runs_weather() {
        tokio::time::timeout(WEATHER_CHECKS_TIMEOUT, check_weather_tools(peer))
            .await
            .with_context(|| {
                format!("weather checks timed out after {:?}", WEATHER_CHECKS_TIMEOUT)
            })??;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_parsing() {
        assert_eq!("basic".parse::<Suite>().unwrap(), Suite::Basic);
        assert_eq!("weather".parse::<Suite>().unwrap(), Suite::Weather);
        assert_eq!("all".parse::<Suite>().unwrap(), Suite::All);
        assert!("everything".parse::<Suite>().is_err());
        assert_eq!(Suite::default(), Suite::All);
    }

    #[test]
    fn test_suite_selection() {
        assert!(Suite::Basic.runs_basic());
        assert!(!Suite::Basic.runs_weather());
        assert!(Suite::All.runs_basic() && Suite::All.runs_weather());
    }

    #[test]
    fn test_resolve_server_bin_prefers_override() {
        let path = resolve_server_bin(
            Some(OsString::from("/opt/weather/server")),
            Path::new("/usr/local/bin/weather_client"),
        );
        assert_eq!(path, PathBuf::from("/opt/weather/server"));
    }

    #[test]
    fn test_resolve_server_bin_uses_sibling() {
        let path = resolve_server_bin(None, Path::new("/usr/local/bin/weather_client"));
        let expected = format!(
            "/usr/local/bin/{}{}",
            SERVER_BIN_NAME,
            std::env::consts::EXE_SUFFIX
        );
        assert_eq!(path, PathBuf::from(expected));
    }

    #[test]
    fn test_resolve_server_bin_ignores_empty_override() {
        let path = resolve_server_bin(Some(OsString::new()), Path::new("/bin/weather_client"));
        assert!(path.starts_with("/bin"));
    }
}
