//! Error types and handling for the weather MCP server.
//!
//! Domain layers keep their own error enums and map them to MCP errors at
//! the protocol boundary. This type covers server startup and shutdown.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("server name must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: server name must not be empty"
        );
    }

    #[test]
    fn test_from_transport_error() {
        let err: Error = TransportError::init("handshake failed").into();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: handshake failed"
        );
    }
}
