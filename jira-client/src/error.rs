//! Error types for the Jira client.
//!
//! [`ConfigError`] covers everything that can go wrong while building the
//! client at startup and is fatal to the process. [`JiraError`] covers a single
//! remote call and is always recoverable by the caller.

use thiserror::Error;

/// Failures while turning configuration into a usable client.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Unsupported proxy protocol: '{0}'")]
  UnsupportedProxyProtocol(String),
  #[error("Invalid proxy URL '{url}': {reason}")]
  InvalidProxyUrl { url: String, reason: String },
  #[error("Failed to build HTTP client: {0}")]
  ClientBuild(#[source] reqwest::Error),
}

/// Failures of a single request against the tracker.
#[derive(Debug, Error)]
pub enum JiraError {
  #[error("HTTP {status}: {status_text}")]
  Http { status: u16, status_text: String },
  #[error("{0}")]
  Network(#[from] reqwest::Error),
  #[error("Invalid request URL: {0}")]
  InvalidUrl(#[from] url::ParseError),
  #[error("Failed to parse Jira response: {0}")]
  MalformedResponse(#[from] serde_json::Error),
}
