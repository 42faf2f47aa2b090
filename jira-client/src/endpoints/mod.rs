//! # Jira API Endpoints
//!
//! Read-only endpoint implementations: fetching a single issue and searching
//! a project's issues with JQL.

pub mod issues;
pub mod search;
