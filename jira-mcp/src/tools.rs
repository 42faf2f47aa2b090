//! Tool registry.
//!
//! [`ToolName`] is the single source of truth for which tools exist: the
//! registry lists every variant and the dispatcher matches on it, so the two
//! cannot drift apart.

pub mod jira;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;

use crate::tools::jira::{GetJiraIssueParams, GetJiraIssuesParams};
use crate::types::ToolError;

/// Every tool the server can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
  GetJiraIssue,
  GetJiraIssues,
}

impl ToolName {
  pub const ALL: [Self; 2] = [Self::GetJiraIssue, Self::GetJiraIssues];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::GetJiraIssue => "get_jira_issue",
      Self::GetJiraIssues => "get_jira_issues",
    }
  }

  pub const fn description(self) -> &'static str {
    match self {
      Self::GetJiraIssue => {
        "Get details for a Jira issue by key, including status, assignee, labels, attachments and comments"
      }
      Self::GetJiraIssues => {
        "List issues in a Jira project, optionally narrowed by an extra JQL condition. Includes sub-tasks."
      }
    }
  }

  fn input_schema(self) -> Arc<JsonObject> {
    match self {
      Self::GetJiraIssue => schema_for::<GetJiraIssueParams>(),
      Self::GetJiraIssues => schema_for::<GetJiraIssuesParams>(),
    }
  }

  /// Registry entry advertised through `tools/list`.
  pub fn descriptor(self) -> Tool {
    Tool::new(self.as_str(), self.description(), self.input_schema())
  }
}

impl fmt::Display for ToolName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ToolName {
  type Err = ToolError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|tool| tool.as_str() == name)
      .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
  }
}

/// Get all available tools
pub fn list_tools() -> Vec<Tool> {
  ToolName::ALL.into_iter().map(ToolName::descriptor).collect()
}

/// JSON schema of a parameter struct, as the object MCP expects.
fn schema_for<T: JsonSchema>() -> Arc<JsonObject> {
  match serde_json::to_value(schemars::schema_for!(T)) {
    Ok(serde_json::Value::Object(map)) => Arc::new(map),
    _ => {
      tracing::warn!("Failed to generate input schema for {}", std::any::type_name::<T>());
      let mut map = JsonObject::new();
      map.insert("type".to_string(), serde_json::Value::String("object".to_string()));
      Arc::new(map)
    }
  }
}
