//! TCP transport implementation.
//!
//! Every accepted connection gets its own MCP session on a separate task.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the listening socket.
    pub async fn bind(&self) -> TransportResult<TcpListener> {
        let addr = self.address();
        TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))
    }

    /// Bind and accept connections until the process stops.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let listener = self.bind().await?;
        info!("Ready - listening on {} (JSON-RPC over TCP)", listener.local_addr()?);
        Self::serve(listener, server).await
    }

    /// Accept connections on an already bound listener.
    pub async fn serve(listener: TcpListener, server: McpServer) -> TransportResult<()> {
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("Accepted connection from {}", peer_addr);

                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }

                    let server = server.clone();
                    tokio::spawn(Self::handle_connection(server, stream, peer_addr));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // Back off on persistent accept errors.
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    async fn handle_connection(server: McpServer, stream: TcpStream, peer_addr: SocketAddr) {
        let service = match server.serve(stream).await {
            Ok(s) => {
                info!("Client {} connected, serving...", peer_addr);
                s
            }
            Err(e) => {
                warn!("Failed to initialize service for {}: {}", peer_addr, e);
                return;
            }
        };

        match service.waiting().await {
            Ok(_) => info!("Client {} disconnected cleanly", peer_addr),
            Err(e) => warn!("Error while serving client {}: {}", peer_addr, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_address() {
        let transport = TcpTransport::new(TcpConfig {
            port: 4321,
            host: "127.0.0.1".to_string(),
        });
        assert_eq!(transport.address(), "127.0.0.1:4321");
    }

    #[tokio::test]
    async fn test_serves_tools_over_tcp() {
        let transport = TcpTransport::new(TcpConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        });
        let listener = transport.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server_task = tokio::spawn(TcpTransport::serve(
            listener,
            McpServer::new(Config::default()),
        ));

        let stream = TcpStream::connect(addr).await.unwrap();
        let client = ().serve(stream).await.unwrap();
        let tools = client.peer().list_all_tools().await.unwrap();
        assert_eq!(tools.len(), 5);

        client.cancel().await.unwrap();
        server_task.abort();
    }
}
