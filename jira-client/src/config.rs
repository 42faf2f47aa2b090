//! # Client Configuration
//!
//! Process-wide settings read once at startup. Nothing here is validated
//! beyond presence: a missing base URL or token is logged and then shows up as
//! failed requests rather than a startup error.

use url::{Position, Url};

use crate::consts::{
  DEFAULT_API_VERSION, ENV_JIRA_API_TOKEN, ENV_JIRA_API_VERSION, ENV_JIRA_BASE_URL, ENV_JIRA_HOST, ENV_JIRA_PROXY_URL,
  ENV_JIRA_VERIFY_SSL,
};

/// Immutable connection settings for the tracker.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
  /// Tracker origin, e.g. `https://company.atlassian.net`
  pub base_url: String,
  /// Bearer credential
  pub api_token: String,
  /// REST API path segment
  pub api_version: String,
  /// Optional proxy URL, see [`crate::proxy::create_proxy_transport`]
  pub proxy_url: Option<String>,
  /// When false, certificate validation is disabled for every request
  pub verify_tls: bool,
}

impl Default for JiraConfig {
  fn default() -> Self {
    Self {
      base_url: String::new(),
      api_token: String::new(),
      api_version: DEFAULT_API_VERSION.to_string(),
      proxy_url: None,
      verify_tls: true,
    }
  }
}

// Manual impl so the token never ends up in logs.
impl std::fmt::Debug for JiraConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraConfig")
      .field("base_url", &self.base_url)
      .field("api_token", &if self.api_token.is_empty() { "<unset>" } else { "<redacted>" })
      .field("api_version", &self.api_version)
      .field("proxy_url", &self.proxy_url.as_ref().map(|_| "<set>"))
      .field("verify_tls", &self.verify_tls)
      .finish()
  }
}

impl JiraConfig {
  /// Read configuration from the process environment.
  pub fn from_env() -> Self {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Read configuration through `lookup`, which maps a variable name to its
  /// value. Blank values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let base_url = match get(ENV_JIRA_BASE_URL).or_else(|| get(ENV_JIRA_HOST)) {
      Some(raw) => normalize_base_url(&raw),
      None => {
        tracing::warn!("{ENV_JIRA_BASE_URL} is not set; Jira requests will fail");
        String::new()
      }
    };

    let api_token = get(ENV_JIRA_API_TOKEN).unwrap_or_else(|| {
      tracing::warn!("{ENV_JIRA_API_TOKEN} is not set; Jira requests will be unauthenticated");
      String::new()
    });

    Self {
      base_url,
      api_token,
      api_version: get(ENV_JIRA_API_VERSION).unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
      proxy_url: get(ENV_JIRA_PROXY_URL),
      verify_tls: get(ENV_JIRA_VERIFY_SSL).is_none_or(|v| !is_falsy(&v)),
    }
  }
}

fn is_falsy(value: &str) -> bool {
  ["0", "false", "no", "off"]
    .iter()
    .any(|f| value.eq_ignore_ascii_case(f))
}

/// Complete a host into a base URL.
///
/// A missing scheme becomes `https://` and a bare `/` path is dropped so paths
/// can be appended with `format!`. Input that still fails to parse is kept as
/// given; the request will report it.
pub fn normalize_base_url(input: &str) -> String {
  let trimmed = input.trim();
  let has_scheme = trimmed
    .split_once("://")
    .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+'));

  let candidate = if has_scheme {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  match Url::parse(&candidate) {
    Ok(url) => {
      let mut result = url[..Position::BeforePath].to_string();
      let path = url.path().trim_end_matches('/');
      result.push_str(path);
      result
    }
    Err(e) => {
      tracing::warn!("Could not parse Jira base URL '{trimmed}': {e}");
      trimmed.trim_end_matches('/').to_string()
    }
  }
}
