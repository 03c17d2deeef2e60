//! Daemon entry point for the OpenSCAD MCP server.
//!
//! Loads configuration from the environment, points the file tools at the
//! working directory, and serves the MCP protocol over stdio and/or
//! streamable HTTP.

mod config;

use std::sync::Arc;

use scad_core::files::Workspace;
use scad_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::{error, info};

use crate::config::ScadConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ScadConfig::from_args()?;
    init_tracing(&config.log_filter);

    let workspace = config
        .workdir
        .as_ref()
        .map_or_else(Workspace::current, Workspace::new);
    info!("starting scad-mcpd with workspace {}", workspace.root().display());

    let workspace = Arc::new(workspace);
    if config.http_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        if config.enable_stdio {
            let http_workspace = workspace.clone();
            let _http = tokio::spawn(async move {
                if let Err(err) = serve_streamable_http(http_workspace, http_config).await {
                    error!("streamable HTTP transport failed: {err}");
                }
            });
            serve_stdio(workspace).await?;
        } else {
            serve_streamable_http(workspace, http_config).await?;
        }
    } else {
        serve_stdio(workspace).await?;
    }
    Ok(())
}

// Logs go to stderr so the stdio transport keeps stdout for the protocol.
fn init_tracing(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
