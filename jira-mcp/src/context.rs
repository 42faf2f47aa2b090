//! Shared server context available to all tool handlers.

use jira_client::{ConfigError, JiraClient, JiraConfig};

/// Shared context available to all tool handlers.
///
/// Built once before the server starts serving and never mutated afterwards.
pub struct ServerContext {
  pub jira: JiraClient,
}

impl ServerContext {
  pub const fn new(jira: JiraClient) -> Self {
    Self { jira }
  }

  /// Build the context from startup configuration.
  ///
  /// Proxy and client construction failures are returned here so the process
  /// can refuse to start.
  pub fn from_config(config: &JiraConfig) -> Result<Self, ConfigError> {
    let jira = JiraClient::new(config)?;
    tracing::info!(
      base_url = jira.base_url(),
      api_version = jira.api_version(),
      proxy = ?jira.proxy().map(|p| p.kind()),
      "Jira client ready"
    );
    Ok(Self::new(jira))
  }
}
