//! Domains module containing business logic organized by bounded contexts.
//!
//! - `weather` - synthetic forecast and alert generation
//! - `tools` - MCP tool definitions wrapping the weather domain and the basic tools
//! - `resources` - read-only MCP resources

pub mod resources;
pub mod tools;
pub mod weather;
