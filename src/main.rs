//! Logseq MCP Server
//!
//! Model Context Protocol server exposing Logseq's HTTP API (block
//! insertion, page creation) to LLM agents over stdio.

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use logseq_mcp::config::ServerConfig;
use logseq_mcp::server::LogseqMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Token and API URL may come from a local .env file.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("logseq_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "logseq-mcp starting (stdio transport)");

    let server = LogseqMcpServer::new(&config)?;
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
