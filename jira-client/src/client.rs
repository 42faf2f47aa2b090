use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::JiraConfig;
use crate::consts::USER_AGENT;
use crate::error::{ConfigError, JiraError};
use crate::models::JiraAuth;
use crate::proxy::{ProxyTransport, create_proxy_transport};

const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

/// Represents a Jira API client
///
/// Built once at startup and shared read-only by every tool invocation.
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_version: String,
  pub(crate) auth: JiraAuth,
  proxy: Option<ProxyTransport>,
}

impl JiraClient {
  /// Create a client from startup configuration.
  ///
  /// Fails when the proxy URL has an unsupported scheme or the HTTP client
  /// cannot be built; both are fatal to startup.
  pub fn new(config: &JiraConfig) -> Result<Self, ConfigError> {
    let proxy = create_proxy_transport(config.proxy_url.as_deref())?;

    // No configured proxy means a direct connection, whatever HTTP_PROXY says.
    let mut builder = Client::builder().user_agent(USER_AGENT);
    builder = match &proxy {
      Some(transport) => builder.proxy(transport.to_reqwest()?),
      None => builder.no_proxy(),
    };
    if !config.verify_tls {
      tracing::warn!("TLS certificate verification is disabled");
      builder = builder.danger_accept_invalid_certs(true);
    }
    let client = builder.build().map_err(ConfigError::ClientBuild)?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      api_version: config.api_version.clone(),
      auth: JiraAuth {
        api_token: config.api_token.clone(),
      },
      proxy,
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn api_version(&self) -> &str {
    &self.api_version
  }

  /// The proxy every request is routed through, if any.
  pub const fn proxy(&self) -> Option<&ProxyTransport> {
    self.proxy.as_ref()
  }

  /// Root of all REST paths, e.g. `https://host/rest/api/2`
  pub(crate) fn api_root(&self) -> String {
    format!("{}/rest/api/{}", self.base_url, self.api_version)
  }

  /// Issue an authenticated GET and decode the JSON body.
  ///
  /// Any status outside 200-299 becomes [`JiraError::Http`] carrying the
  /// canonical reason phrase, or `Unknown Status` for codes without one.
  pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, JiraError> {
    tracing::debug!("GET {url}");

    let response = self
      .client
      .get(url)
      .bearer_auth(&self.auth.api_token)
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, "application/json")
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      tracing::debug!("Jira responded with {status}");
      return Err(JiraError::Http {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or(UNKNOWN_STATUS_TEXT).to_string(),
      });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, api_token: &str) -> Result<JiraClient, ConfigError> {
  JiraClient::new(&JiraConfig {
    base_url: base_url.to_string(),
    api_token: api_token.to_string(),
    ..JiraConfig::default()
  })
}
