//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build and run the server until it is stopped
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting {} v{}", crate::NAME, crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    let server_config = server.config();
    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API Endpoints:");
    info!("   GET    /health");
    info!("   GET    /api/items");
    info!("   POST   /api/items");
    info!("   GET    /api/items/process");
    info!("   GET    /api/items/{{id}}");
    info!("   PUT    /api/items/{{id}}");
    info!("   DELETE /api/items/{{id}}");

    server.start().await
}
