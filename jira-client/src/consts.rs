//! Constants for the jira-client crate.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jira-mcp/", env!("CARGO_PKG_VERSION"));

/// REST API version used when `JIRA_API_VERSION` is unset
pub const DEFAULT_API_VERSION: &str = "2";

/// Environment variable holding the tracker base URL.
pub const ENV_JIRA_BASE_URL: &str = "JIRA_BASE_URL";
/// Consulted when [`ENV_JIRA_BASE_URL`] is unset.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const ENV_JIRA_API_VERSION: &str = "JIRA_API_VERSION";
pub const ENV_JIRA_PROXY_URL: &str = "JIRA_PROXY_URL";
pub const ENV_JIRA_VERIFY_SSL: &str = "JIRA_VERIFY_SSL";
