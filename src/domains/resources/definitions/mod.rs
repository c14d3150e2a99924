//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and the
//! kind of content it resolves to.

pub mod city_registry;
pub mod server_info;

pub use city_registry::CityRegistryResource;
pub use server_info::ServerInfoResource;

use super::service::ResourceKind;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// How the service produces this resource's content.
    const KIND: ResourceKind;
}
