//! Resource service implementation.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! All current resources are rendered on read, so their content always
//! reflects the running server.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::definitions::{CityRegistryResource, ServerInfoResource};
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ServerConfig;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Identity reported by the server info resource.
    server: ServerConfig,

    /// Registered resources in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// What the content is rendered from.
    pub kind: ResourceKind,
}

/// Content sources for resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Server name, version and tool names.
    ServerInfo,

    /// The static weather city registry.
    CityRegistry,
}

impl ResourceService {
    /// Create a new ResourceService reporting the given server identity.
    pub fn new(server: ServerConfig) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources();
        for entry in &resources {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self { server, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match entry.kind {
            ResourceKind::ServerInfo => ServerInfoResource::render(&self.server)?,
            ResourceKind::CityRegistry => CityRegistryResource::render()?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
