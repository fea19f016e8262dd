//! Daemon entry point for the dxd MCP server.
//!
//! Loads configuration from the environment, wires the GraphQL transport,
//! and serves the MCP protocol over stdio or streamable HTTP.

mod config;
mod transport;

use std::sync::Arc;

use dxd_mcp::server::{self, McpHttpServerConfig};

use crate::config::DxdConfig;
use crate::transport::build_content_service;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the stdio MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DxdConfig::from_args()?;
    let service = Arc::new(build_content_service(&config)?);

    if config.enable_stdio {
        server::serve_stdio(service).await?;
        return Ok(());
    }

    if config.mcp_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        server::serve_streamable_http(service, http_config).await?;
    }

    Ok(())
}
