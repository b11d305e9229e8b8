/*!
`serve.rs`

Runs the MCP server over stdio until the client disconnects. stdout carries
the protocol; all logging goes to stderr.
*/

use anyhow::{Context, Result};
use rmcp::{ServiceExt, transport::stdio};

use crate::config::Config;
use crate::mcp::VagrantServer;
use crate::vagrant::Dispatcher;

pub fn execute_serve(config: Config) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    tracing::info!(
        projects_dir = %config.projects_dir().display(),
        vagrant_bin = config.vagrant_bin(),
        "starting vagrant-mcp-server on stdio"
    );
    let server = VagrantServer::new(Dispatcher::new(config));

    let service = server
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;

    let reason = service.waiting().await.context("MCP server task failed")?;
    tracing::info!("MCP server stopped: {reason:?}");
    Ok(())
}
