//! # Jira API Client
//!
//! Read-only Jira REST integration used by the jira-mcp server: startup
//! configuration, proxy selection, and the `issue` and `search` endpoints.

mod client;
pub mod config;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
pub mod proxy;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use config::JiraConfig;
pub use endpoints::search::project_jql;
pub use error::{ConfigError, JiraError};
// Re-export models
pub use models::{
  JiraAttachment, JiraAuth, JiraComment, JiraCommentPage, JiraIssue, JiraIssueFields, JiraNamed, JiraSearchResults,
  JiraSubtask, JiraSubtaskFields, JiraUser,
};
pub use proxy::{ProxyKind, ProxyTransport, create_proxy_transport};
