use serde::Deserialize;
use serde_json::Value;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub api_token: String,
}

/// Represents a Jira issue as returned by `issue/{key}` and inside search
/// results
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  #[serde(default)]
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
///
/// Only `status` and `issuetype` are required; everything else tolerates being
/// absent or `null`.
#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  /// Plain string in API v2, a document object in v3
  pub description: Option<Value>,
  pub status: JiraNamed,
  pub assignee: Option<JiraUser>,
  pub reporter: Option<JiraUser>,
  pub priority: Option<JiraNamed>,
  pub issuetype: JiraNamed,
  pub created: Option<String>,
  pub updated: Option<String>,
  pub duedate: Option<String>,
  pub labels: Option<Vec<String>>,
  pub attachment: Option<Vec<JiraAttachment>>,
  pub comment: Option<JiraCommentPage>,
  pub subtasks: Option<Vec<JiraSubtask>>,
}

/// Any Jira object identified by a display name: status, priority, issue type
#[derive(Debug, Deserialize)]
pub struct JiraNamed {
  pub name: String,
}

/// Represents a Jira user
///
/// `display_name` is empty when the tracker omits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(default)]
  pub display_name: String,
}

/// Represents a file attached to an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraAttachment {
  #[serde(default)]
  pub filename: String,
  pub author: Option<JiraUser>,
  pub created: Option<String>,
  #[serde(default)]
  pub size: u64,
  pub mime_type: Option<String>,
  /// Download URL
  pub content: Option<String>,
}

/// The `comment` field of an issue
#[derive(Debug, Deserialize)]
pub struct JiraCommentPage {
  #[serde(default)]
  pub comments: Vec<JiraComment>,
}

/// Represents a single issue comment
#[derive(Debug, Deserialize)]
pub struct JiraComment {
  pub author: Option<JiraUser>,
  /// Plain string in API v2, a document object in v3
  #[serde(default)]
  pub body: Value,
  pub created: Option<String>,
}

/// Represents a sub-task reference embedded in its parent issue
#[derive(Debug, Deserialize)]
pub struct JiraSubtask {
  pub key: String,
  pub fields: JiraSubtaskFields,
}

/// Represents the reduced field set Jira embeds for sub-tasks
#[derive(Debug, Deserialize)]
pub struct JiraSubtaskFields {
  #[serde(default)]
  pub summary: String,
  pub status: JiraNamed,
}

/// Represents one page of `search` results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub start_at: u64,
  #[serde(default)]
  pub max_results: u64,
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}
