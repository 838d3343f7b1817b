//! The external GitHub API boundary.
//!
//! This module defines the [`GitHubProvider`] trait consumed by the search
//! pipeline, the [`ProviderError`] taxonomy, the live [`GitHubClient`]
//! transport, and a scripted [`MockProvider`] for tests. The pipeline only
//! ever sees the trait; everything transport-specific (auth headers, retry,
//! JSON decoding) stays behind it.

mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockProvider;

use async_trait::async_trait;

use crate::models::{Repo, UserDetail, UserSearchResponse};

/// Interface to the GitHub endpoints the pipeline depends on.
#[async_trait]
pub trait GitHubProvider: Send + Sync + std::fmt::Debug {
    /// Run a user search for one page of results.
    ///
    /// `expression` is the full wire query (e.g. `rust in:bio location:Berlin`).
    async fn search_users(
        &self,
        expression: &str,
        page: u32,
        per_page: u32,
    ) -> Result<UserSearchResponse, ProviderError>;

    /// Fetch the full profile record for a username.
    async fn get_user(&self, username: &str) -> Result<UserDetail, ProviderError>;

    /// List up to `limit` of the user's repositories, ordered
    /// most-recently-pushed-first.
    async fn list_recent_repos(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<Repo>, ProviderError>;
}

/// Errors from a provider call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network or transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication failure (bad or missing credential)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit or quota exhausted
    #[error("Rate limit exceeded")]
    RateLimit,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected response from the API
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}
