//! jira-mcp: MCP server exposing read-only Jira issue lookup and search.

use anyhow::{Context, Result};
use jira_client::JiraConfig;
use jira_mcp::{JiraMcpServer, ServerContext};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
  // Tracing to stderr; stdout is reserved for the MCP JSON-RPC protocol.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(filter)
    .init();

  let config = JiraConfig::from_env();
  let context = ServerContext::from_config(&config).context("Failed to initialise Jira client")?;
  let server = JiraMcpServer::new(context);

  // Start MCP server on stdio
  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  tracing::debug!("Host closed the connection, shutting down");
  Ok(())
}
