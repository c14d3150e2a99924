//! MCP Server implementation.
//!
//! The handler answers protocol requests by delegating to the domain
//! services. Tool calls are dispatched by the `ToolRouter` built in
//! `domains/tools/router.rs`, so adding a tool does not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error;
use super::transport::TransportService;
use crate::domains::{
    resources::{ResourceError, ResourceService},
    tools::{ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Synthetic weather server. Use get_weather_forecast for a 1-10 day \
forecast of a supported city in celsius or fahrenheit, and get_weather_alerts for active \
alerts. The weather://cities resource lists the supported cities. echo, add_numbers and \
sort_list are simple utility tools.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(config.server.clone()));

        Self {
            tool_router: build_tool_router::<Self>(),
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Names of every tool this server exposes.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolRegistry::tool_names()
    }
}

/// Validate `config`, build the server and serve it on the configured
/// transport until the transport shuts down.
pub async fn serve(config: Config) -> error::Result<()> {
    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);
    info!("Registered tools: {}", server.tool_names().join(", "));

    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| {
                warn!("Failed to read resource {}: {}", request.uri, e);
                match e {
                    ResourceError::NotFound(_) => McpError::resource_not_found(
                        e.to_string(),
                        Some(serde_json::json!({ "uri": request.uri })),
                    ),
                    ResourceError::Internal(_) => McpError::internal_error(e.to_string(), None),
                }
            })
    }
}
