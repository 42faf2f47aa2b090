//! Parameter structs for Jira tools.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetJiraIssueParams {
  /// Jira issue key (e.g. "PROJ-123").
  pub issue_key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetJiraIssuesParams {
  /// Jira project key (e.g. "PROJ").
  pub project_key: String,
  /// Extra JQL appended with AND (e.g. "status = Open").
  pub jql: Option<String>,
}

impl GetJiraIssuesParams {
  /// The JQL fragment, treating an empty string as absent.
  pub fn jql_fragment(&self) -> Option<&str> {
    self.jql.as_deref().filter(|s| !s.trim().is_empty())
  }
}
