//! MCP server implementation: tool dispatch and the rmcp handler.

use std::sync::Arc;

use rmcp::model::{
  CallToolRequestParams, CallToolResult, JsonObject, ListToolsResult, PaginatedRequestParams, ServerCapabilities,
  ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde::de::DeserializeOwned;

use crate::context::ServerContext;
use crate::tools::jira::{GetJiraIssueParams, GetJiraIssuesParams};
use crate::tools::{ToolName, list_tools};
use crate::types::{JiraIssueResponse, SearchIssuesResponse, ToolError, success_envelope};

#[derive(Clone)]
pub struct JiraMcpServer {
  context: Arc<ServerContext>,
}

impl JiraMcpServer {
  pub fn new(context: ServerContext) -> Self {
    Self {
      context: Arc::new(context),
    }
  }

  /// Route one invocation and turn its outcome into an envelope.
  ///
  /// This is the only place tool failures are caught; nothing raised by a
  /// handler escapes to the host.
  pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
    tracing::debug!(tool = name, "Handling tool call");
    match self.run_tool(name, arguments).await {
      Ok(result) => result,
      Err(e) => {
        tracing::warn!(tool = name, "Tool call failed: {e}");
        e.into_envelope()
      }
    }
  }

  async fn run_tool(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult, ToolError> {
    let tool: ToolName = name.parse()?;
    match tool {
      ToolName::GetJiraIssue => {
        let params: GetJiraIssueParams = parse_arguments(tool, arguments)?;
        success_envelope(&self.get_jira_issue(&params).await?)
      }
      ToolName::GetJiraIssues => {
        let params: GetJiraIssuesParams = parse_arguments(tool, arguments)?;
        success_envelope(&self.get_jira_issues(&params).await?)
      }
    }
  }

  // =========================================================================
  // Jira tools
  // =========================================================================

  /// Fetch one issue and project it.
  pub async fn get_jira_issue(&self, params: &GetJiraIssueParams) -> Result<JiraIssueResponse, ToolError> {
    let issue = self.context.jira.get_issue(&params.issue_key).await?;
    Ok(JiraIssueResponse::from(&issue))
  }

  /// Search a project and project the first page of results.
  pub async fn get_jira_issues(&self, params: &GetJiraIssuesParams) -> Result<SearchIssuesResponse, ToolError> {
    let results = self
      .context
      .jira
      .search_issues(&params.project_key, params.jql_fragment())
      .await?;
    Ok(SearchIssuesResponse::from(&results))
  }
}

impl ServerHandler for JiraMcpServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "Jira MCP server. Provides read-only access to Jira issues: fetch one issue by key \
         with get_jira_issue, or list a project's issues with get_jira_issues."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }

  async fn list_tools(
    &self,
    _request: Option<PaginatedRequestParams>,
    _context: RequestContext<RoleServer>,
  ) -> Result<ListToolsResult, McpError> {
    Ok(ListToolsResult::with_all_items(list_tools()))
  }

  async fn call_tool(
    &self,
    request: CallToolRequestParams,
    _context: RequestContext<RoleServer>,
  ) -> Result<CallToolResult, McpError> {
    Ok(self.dispatch(&request.name, request.arguments).await)
  }
}

// ===========================================================================
// Helper functions
// ===========================================================================

/// Deserialize the argument bag of `tool`; an absent bag is treated as `{}`.
fn parse_arguments<T: DeserializeOwned>(tool: ToolName, arguments: Option<JsonObject>) -> Result<T, ToolError> {
  serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default())).map_err(|source| {
    ToolError::InvalidArguments {
      tool: tool.as_str(),
      source,
    }
  })
}
