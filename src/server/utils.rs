//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::ServiceError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an actionable error message
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> ServiceError {
        let error_str = error.to_string();

        if error.kind() == ErrorKind::AddrInUse
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            ServiceError::server(format!(
                "Port {} is already in use. Stop the other process or pick another port \
                 (for example --port {} or ITEM_SERVICE_PORT={}).",
                port,
                port.saturating_add(1),
                port.saturating_add(1)
            ))
        } else if error.kind() == ErrorKind::PermissionDenied || error_str.contains("os error 13")
        {
            ServiceError::server(format!(
                "Permission denied for port {}. Ports below 1024 need elevated privileges; \
                 use --port 8080 instead.",
                port
            ))
        } else {
            ServiceError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
