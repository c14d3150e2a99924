//! Server info resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::ServerConfig;
use crate::domains::resources::ResourceError;
use crate::domains::resources::service::ResourceKind;
use crate::domains::tools::ToolRegistry;

/// Server name, version and registered tools (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server";
    const MIME_TYPE: &'static str = "application/json";
    const KIND: ResourceKind = ResourceKind::ServerInfo;
}

#[derive(Serialize)]
struct ServerInfoDocument<'a> {
    name: &'a str,
    version: &'a str,
    tools: Vec<&'static str>,
}

impl ServerInfoResource {
    /// Render the server description as pretty-printed JSON.
    pub fn render(server: &ServerConfig) -> Result<String, ResourceError> {
        let document = ServerInfoDocument {
            name: &server.name,
            version: &server.version,
            tools: ToolRegistry::tool_names(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "mcp://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_render() {
        let server = ServerConfig {
            name: "test-weather".to_string(),
            version: "9.9.9".to_string(),
        };
        let rendered = ServerInfoResource::render(&server).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["name"], "test-weather");
        assert_eq!(value["version"], "9.9.9");
        assert_eq!(value["tools"].as_array().unwrap().len(), 5);
        assert_eq!(value["tools"][3], "get_weather_forecast");
    }
}
