use super::load_navigator;
use crate::mcp::{start_server, McpServer};
use crate::Result;
use std::path::Path;
use std::sync::Arc;

/// Start the HTTP server (REST + MCP)
pub async fn run_http(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let navigator = load_navigator(config_path)?;
    let host = host.unwrap_or_else(|| navigator.config().server.host.clone());
    let port = port.unwrap_or(navigator.config().server.port);

    start_server(Arc::new(navigator), &host, port).await
}

/// Serve MCP over stdio
pub async fn run_stdio(config_path: Option<&Path>) -> Result<()> {
    let navigator = load_navigator(config_path)?;
    McpServer::new(Arc::new(navigator)).run().await
}
