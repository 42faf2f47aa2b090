//! # Jira MCP Server
//!
//! Model Context Protocol server exposing two read-only Jira operations to a
//! host application over stdio: fetching a single issue and searching a
//! project's issues with JQL.
//!
//! Tool results are wrapped in a uniform text envelope; every failure of a
//! single invocation is reported in-band and never reaches the host as a
//! protocol error.

pub mod context;
pub mod server;
pub mod tools;
pub mod types;

pub use context::ServerContext;
pub use server::JiraMcpServer;
