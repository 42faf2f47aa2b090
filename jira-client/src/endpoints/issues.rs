//! # Jira Issue Endpoints
//!
//! Fetching a single issue by key.

use reqwest::Url;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::JiraIssue;

impl JiraClient {
  /// URL of `issue/{issue_key}`. The key is not validated; the tracker
  /// rejects malformed keys.
  pub fn issue_url(&self, issue_key: &str) -> Result<Url, JiraError> {
    Ok(Url::parse(&format!("{}/issue/{}", self.api_root(), issue_key))?)
  }

  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
    let url = self.issue_url(issue_key)?;
    self.get_json(url).await
  }
}
