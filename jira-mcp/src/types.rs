//! Response envelope, projection, and error types for jira-mcp tools.
//!
//! Every tool returns a single text item holding either the pretty-printed
//! projection or an `Error: ...` message. `isError` is only present on
//! failure.

use jira_client::{JiraAttachment, JiraComment, JiraError, JiraIssue, JiraSearchResults, JiraSubtask, JiraUser};
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Shown when an issue has no assignee.
pub const UNASSIGNED: &str = "Unassigned";
/// Shown when a reporter or author is missing.
pub const UNKNOWN_USER: &str = "Unknown";
/// Shown when an issue has no priority.
pub const NO_PRIORITY: &str = "None";

/// Wrap a projection as a successful tool result.
pub fn success_envelope<T: Serialize>(data: &T) -> Result<CallToolResult, ToolError> {
  let text = serde_json::to_string_pretty(data).map_err(ToolError::Serialization)?;
  let mut result = CallToolResult::success(vec![Content::text(text)]);
  result.is_error = None;
  Ok(result)
}

/// Failures of a single tool invocation. All of them are reported in-band.
#[derive(Debug, Error)]
pub enum ToolError {
  #[error("Unknown tool: {0}")]
  UnknownTool(String),
  #[error("Invalid arguments for {tool}: {source}")]
  InvalidArguments {
    tool: &'static str,
    #[source]
    source: serde_json::Error,
  },
  #[error(transparent)]
  Jira(#[from] JiraError),
  #[error("Failed to serialize result: {0}")]
  Serialization(#[source] serde_json::Error),
}

impl ToolError {
  /// Convert into the error envelope: `Error: <message>` with `isError: true`.
  pub fn into_envelope(self) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {self}"))])
  }
}

// ---------------------------------------------------------------------------
// get_jira_issue
// ---------------------------------------------------------------------------

/// Response for `get_jira_issue`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueResponse {
  pub key: String,
  pub summary: String,
  pub description: Value,
  pub status: String,
  pub assignee: String,
  pub priority: String,
  pub issue_type: String,
  pub created: Option<String>,
  pub updated: Option<String>,
  pub labels: Vec<String>,
  pub attachments: Vec<AttachmentInfo>,
  pub comments: Vec<CommentInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInfo {
  pub filename: String,
  pub author: String,
  pub created: Option<String>,
  pub size: u64,
  pub mime_type: Option<String>,
  /// Download URL
  pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentInfo {
  pub author: String,
  pub body: Value,
  pub created: Option<String>,
}

// ---------------------------------------------------------------------------
// get_jira_issues
// ---------------------------------------------------------------------------

/// Response for `get_jira_issues`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIssuesResponse {
  pub total: u64,
  pub start_at: u64,
  pub max_results: u64,
  pub issues: Vec<JiraIssueSummary>,
}

/// One issue inside a search result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueSummary {
  pub id: String,
  pub key: String,
  pub summary: String,
  pub description: Value,
  pub status: String,
  pub assignee: String,
  pub reporter: String,
  pub priority: String,
  pub issue_type: String,
  pub created: Option<String>,
  pub updated: Option<String>,
  pub duedate: Option<String>,
  pub labels: Vec<String>,
  pub subtasks: Vec<SubtaskInfo>,
}

#[derive(Debug, Serialize)]
pub struct SubtaskInfo {
  pub key: String,
  pub summary: String,
  pub status: String,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

fn display_name(user: Option<&JiraUser>, fallback: &str) -> String {
  user
    .map(|u| u.display_name.as_str())
    .filter(|name| !name.is_empty())
    .unwrap_or(fallback)
    .to_string()
}

fn priority_name(issue: &JiraIssue) -> String {
  issue
    .fields
    .priority
    .as_ref()
    .map_or_else(|| NO_PRIORITY.to_string(), |p| p.name.clone())
}

impl From<&JiraAttachment> for AttachmentInfo {
  fn from(attachment: &JiraAttachment) -> Self {
    Self {
      filename: attachment.filename.clone(),
      author: display_name(attachment.author.as_ref(), UNKNOWN_USER),
      created: attachment.created.clone(),
      size: attachment.size,
      mime_type: attachment.mime_type.clone(),
      url: attachment.content.clone(),
    }
  }
}

impl From<&JiraComment> for CommentInfo {
  fn from(comment: &JiraComment) -> Self {
    Self {
      author: display_name(comment.author.as_ref(), UNKNOWN_USER),
      body: comment.body.clone(),
      created: comment.created.clone(),
    }
  }
}

impl From<&JiraSubtask> for SubtaskInfo {
  fn from(subtask: &JiraSubtask) -> Self {
    Self {
      key: subtask.key.clone(),
      summary: subtask.fields.summary.clone(),
      status: subtask.fields.status.name.clone(),
    }
  }
}

impl From<&JiraIssue> for JiraIssueResponse {
  fn from(issue: &JiraIssue) -> Self {
    let fields = &issue.fields;
    Self {
      key: issue.key.clone(),
      summary: fields.summary.clone(),
      description: fields.description.clone().unwrap_or(Value::Null),
      status: fields.status.name.clone(),
      assignee: display_name(fields.assignee.as_ref(), UNASSIGNED),
      priority: priority_name(issue),
      issue_type: fields.issuetype.name.clone(),
      created: fields.created.clone(),
      updated: fields.updated.clone(),
      labels: fields.labels.clone().unwrap_or_default(),
      attachments: fields
        .attachment
        .iter()
        .flatten()
        .map(AttachmentInfo::from)
        .collect(),
      comments: fields
        .comment
        .iter()
        .flat_map(|page| &page.comments)
        .map(CommentInfo::from)
        .collect(),
    }
  }
}

impl From<&JiraIssue> for JiraIssueSummary {
  fn from(issue: &JiraIssue) -> Self {
    let fields = &issue.fields;
    Self {
      id: issue.id.clone(),
      key: issue.key.clone(),
      summary: fields.summary.clone(),
      description: fields.description.clone().unwrap_or(Value::Null),
      status: fields.status.name.clone(),
      assignee: display_name(fields.assignee.as_ref(), UNASSIGNED),
      reporter: display_name(fields.reporter.as_ref(), UNKNOWN_USER),
      priority: priority_name(issue),
      issue_type: fields.issuetype.name.clone(),
      created: fields.created.clone(),
      updated: fields.updated.clone(),
      duedate: fields.duedate.clone(),
      labels: fields.labels.clone().unwrap_or_default(),
      subtasks: fields.subtasks.iter().flatten().map(SubtaskInfo::from).collect(),
    }
  }
}

impl From<&JiraSearchResults> for SearchIssuesResponse {
  fn from(results: &JiraSearchResults) -> Self {
    Self {
      total: results.total,
      start_at: results.start_at,
      max_results: results.max_results,
      issues: results.issues.iter().map(JiraIssueSummary::from).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn issue_from(value: Value) -> JiraIssue {
    serde_json::from_value(value).unwrap()
  }

  fn envelope_json(result: &CallToolResult) -> Value {
    serde_json::to_value(result).unwrap()
  }

  #[test]
  fn test_issue_projection_defaults() {
    let issue = issue_from(json!({
        "key": "PROJ-1",
        "fields": {
            "summary": "S",
            "status": { "name": "Open" },
            "priority": { "name": "High" },
            "issuetype": { "name": "Bug" },
            "assignee": null,
            "labels": ["a", "b"]
        }
    }));

    let projected = serde_json::to_value(JiraIssueResponse::from(&issue)).unwrap();

    assert_eq!(projected["assignee"], "Unassigned");
    assert_eq!(projected["priority"], "High");
    assert_eq!(projected["issueType"], "Bug");
    assert_eq!(projected["labels"], json!(["a", "b"]));
    assert_eq!(projected["attachments"], json!([]));
    assert_eq!(projected["comments"], json!([]));
    assert_eq!(projected["description"], Value::Null);
  }

  #[test]
  fn test_issue_projection_missing_priority() {
    let issue = issue_from(json!({
        "key": "PROJ-2",
        "fields": { "status": { "name": "Open" }, "issuetype": { "name": "Task" } }
    }));

    let projected = JiraIssueResponse::from(&issue);
    assert_eq!(projected.priority, NO_PRIORITY);
    assert!(projected.labels.is_empty());
  }

  #[test]
  fn test_issue_projection_attachments_and_comments() {
    let issue = issue_from(json!({
        "key": "PROJ-3",
        "fields": {
            "summary": "With extras",
            "status": { "name": "Done" },
            "issuetype": { "name": "Story" },
            "assignee": { "displayName": "Jane Doe" },
            "created": "2024-01-01T10:00:00.000+0000",
            "updated": "2024-01-02T10:00:00.000+0000",
            "attachment": [{
                "filename": "trace.log",
                "author": { "displayName": "Sam" },
                "created": "2024-01-01T11:00:00.000+0000",
                "size": 512,
                "mimeType": "text/plain",
                "content": "https://jira.example.com/attachment/1"
            }, {
                "filename": "orphan.png",
                "size": 1
            }],
            "comment": {
                "comments": [{
                    "author": { "displayName": "Alex" },
                    "body": "Ship it",
                    "created": "2024-01-02T09:00:00.000+0000"
                }]
            }
        }
    }));

    let projected = serde_json::to_value(JiraIssueResponse::from(&issue)).unwrap();

    assert_eq!(projected["assignee"], "Jane Doe");
    assert_eq!(projected["created"], "2024-01-01T10:00:00.000+0000");
    assert_eq!(
      projected["attachments"][0],
      json!({
          "filename": "trace.log",
          "author": "Sam",
          "created": "2024-01-01T11:00:00.000+0000",
          "size": 512,
          "mimeType": "text/plain",
          "url": "https://jira.example.com/attachment/1"
      })
    );
    assert_eq!(projected["attachments"][1]["author"], "Unknown");
    assert_eq!(
      projected["comments"],
      json!([{ "author": "Alex", "body": "Ship it", "created": "2024-01-02T09:00:00.000+0000" }])
    );
  }

  #[test]
  fn test_nameless_users_fall_back_to_sentinels() {
    let issue = issue_from(json!({
        "key": "PROJ-4",
        "fields": {
            "status": { "name": "Open" },
            "issuetype": { "name": "Task" },
            "assignee": { "accountId": "abc" },
            "attachment": [{ "filename": "a.txt", "author": {} }],
            "comment": { "comments": [{ "author": { "displayName": "" }, "body": "hi" }] }
        }
    }));

    let projected = JiraIssueResponse::from(&issue);
    assert_eq!(projected.assignee, UNASSIGNED);
    assert_eq!(projected.attachments[0].author, UNKNOWN_USER);
    assert_eq!(projected.comments[0].author, UNKNOWN_USER);
  }

  #[test]
  fn test_search_projection_defaults() {
    let results: JiraSearchResults = serde_json::from_value(json!({
        "startAt": 0,
        "maxResults": 50,
        "total": 2,
        "issues": [{
            "id": "1",
            "key": "PP-1",
            "fields": {
                "summary": "No extras",
                "status": { "name": "Open" },
                "issuetype": { "name": "Task" }
            }
        }, {
            "id": "2",
            "key": "PP-2",
            "fields": {
                "summary": "Parent",
                "status": { "name": "In Progress" },
                "issuetype": { "name": "Story" },
                "reporter": { "displayName": "Rita" },
                "priority": { "name": "Low" },
                "duedate": "2024-06-30",
                "subtasks": [{
                    "key": "PP-3",
                    "fields": { "summary": "Child", "status": { "name": "Done" } }
                }]
            }
        }]
    }))
    .unwrap();

    let projected = serde_json::to_value(SearchIssuesResponse::from(&results)).unwrap();

    assert_eq!(projected["total"], 2);
    assert_eq!(projected["startAt"], 0);
    assert_eq!(projected["maxResults"], 50);

    let bare = &projected["issues"][0];
    assert_eq!(bare["subtasks"], json!([]));
    assert_eq!(bare["labels"], json!([]));
    assert_eq!(bare["assignee"], "Unassigned");
    assert_eq!(bare["reporter"], "Unknown");
    assert_eq!(bare["priority"], "None");
    assert_eq!(bare["duedate"], Value::Null);
    assert!(bare.get("attachments").is_none());
    assert!(bare.get("comments").is_none());

    let parent = &projected["issues"][1];
    assert_eq!(parent["reporter"], "Rita");
    assert_eq!(parent["duedate"], "2024-06-30");
    assert_eq!(
      parent["subtasks"],
      json!([{ "key": "PP-3", "summary": "Child", "status": "Done" }])
    );
  }

  #[test]
  fn test_success_envelope_is_indented_text() {
    let result = success_envelope(&json!({ "key": "PROJ-1" })).unwrap();
    let json = envelope_json(&result);

    assert_eq!(json["content"][0]["type"], "text");
    assert_eq!(json["content"][0]["text"], "{\n  \"key\": \"PROJ-1\"\n}");
    assert!(json.get("isError").is_none());
  }

  #[test]
  fn test_error_envelope() {
    let result = ToolError::UnknownTool("nope".to_string()).into_envelope();
    let json = envelope_json(&result);

    assert_eq!(json["content"][0]["type"], "text");
    assert_eq!(json["content"][0]["text"], "Error: Unknown tool: nope");
    assert_eq!(json["isError"], true);
  }

  #[test]
  fn test_jira_errors_keep_their_message() {
    let err = ToolError::from(JiraError::Http {
      status: 404,
      status_text: "Not Found".to_string(),
    });
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
  }
}
