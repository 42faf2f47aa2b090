//! # Jira Search Endpoints
//!
//! Project-scoped issue search. The project key and the optional JQL fragment
//! are concatenated verbatim; the caller is trusted not to inject unintended
//! clauses. Only the assembled query as a whole is percent-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::JiraSearchResults;

/// Everything except the unreserved characters of a URI component.
const JQL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

/// Build the effective JQL for a project search.
///
/// `project = KEY` alone, or `project = KEY AND <jql>` when a fragment is
/// given.
pub fn project_jql(project_key: &str, jql: Option<&str>) -> String {
  match jql {
    Some(fragment) => format!("project = {project_key} AND {fragment}"),
    None => format!("project = {project_key}"),
  }
}

impl JiraClient {
  /// URL of `search?jql=...` for the given project and fragment.
  pub fn search_url(&self, project_key: &str, jql: Option<&str>) -> Result<Url, JiraError> {
    let mut url = Url::parse(&format!("{}/search", self.api_root()))?;
    let query = project_jql(project_key, jql);
    url.set_query(Some(&format!("jql={}", utf8_percent_encode(&query, JQL_ENCODE_SET))));
    Ok(url)
  }

  /// Search a project's issues, optionally narrowed by a JQL fragment.
  ///
  /// Returns the first page only, as sized by the tracker.
  pub async fn search_issues(&self, project_key: &str, jql: Option<&str>) -> Result<JiraSearchResults, JiraError> {
    let url = self.search_url(project_key, jql)?;
    self.get_json(url).await
  }
}
