//! Weather MCP Server Library
//!
//! A Model Context Protocol server that produces synthetic weather forecasts
//! and alerts for a fixed set of cities, alongside a few basic utility tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **weather**: city registry, forecast generation and alert derivation
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: data resources that can be read by clients
//! - **client**: a demo client that exercises every tool
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::{Config, McpServer};
//! use weather_mcp_server::core::TransportService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
