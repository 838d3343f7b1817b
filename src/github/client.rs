//! Live GitHub REST API transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::Config;
use crate::github::{GitHubProvider, ProviderError};
use crate::models::{Repo, UserDetail, UserSearchResponse};
use crate::utils::{build_http_client, with_retry, RetryConfig};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub REST API client.
///
/// Authenticates with a bearer token and maps HTTP failures onto the
/// [`ProviderError`] taxonomy. Transient failures (transport errors, rate
/// limits, 5xx) are retried with bounded backoff; everything else
/// propagates on the first attempt.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    retry: RetryConfig,
}

impl GitHubClient {
    /// Create a client authenticating with the given token.
    pub fn new(token: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_http_client(token, Duration::from_secs(30))?,
            base_url: GITHUB_API_BASE.to_string(),
            retry: RetryConfig::default(),
        })
    }

    /// Create a client from runtime configuration. A missing token is a
    /// configuration error: no call is ever attempted without one.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let token = config.token.as_deref().ok_or_else(|| {
            ProviderError::Auth(
                "GitHub token not configured. Set GITHUB_TOKEN or add it to the config file."
                    .to_string(),
            )
        })?;

        Ok(Self {
            client: build_http_client(token, Duration::from_secs(config.api.timeout_secs))?,
            base_url: config.api.base_url.clone(),
            retry: RetryConfig::default(),
        })
    }

    /// Override the API base URL (used by HTTP-level tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the retry policy.
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn get(&self, url: &str, context: &str) -> Result<Response, ProviderError> {
        with_retry(self.retry, || {
            let request = self.client.get(url);
            let context = context.to_string();
            async move {
                let response = request
                    .send()
                    .await
                    .map_err(|e| ProviderError::Network(format!("{}: {}", context, e)))?;
                Self::check_status(response, &context)
            }
        })
        .await
    }

    fn check_status(response: Response, context: &str) -> Result<Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            401 => Err(ProviderError::Auth(format!(
                "{}: credentials rejected",
                context
            ))),
            // GitHub signals both quota exhaustion and abuse limits as 403
            403 | 429 => Err(ProviderError::RateLimit),
            404 => Err(ProviderError::NotFound(context.to_string())),
            _ if status.is_server_error() => Err(ProviderError::Network(format!(
                "{}: server error {}",
                context, status
            ))),
            _ => Err(ProviderError::Api(format!(
                "{}: unexpected status {}",
                context, status
            ))),
        }
    }
}

#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn search_users(
        &self,
        expression: &str,
        page: u32,
        per_page: u32,
    ) -> Result<UserSearchResponse, ProviderError> {
        let url = format!(
            "{}/search/users?q={}&page={}&per_page={}",
            self.base_url,
            urlencoding::encode(expression),
            page,
            per_page
        );

        let response = self.get(&url, "user search").await?;

        response
            .json::<UserSearchResponse>()
            .await
            .map_err(|e| ProviderError::Parse(format!("user search response: {}", e)))
    }

    async fn get_user(&self, username: &str) -> Result<UserDetail, ProviderError> {
        let url = format!(
            "{}/users/{}",
            self.base_url,
            urlencoding::encode(username)
        );

        let response = self.get(&url, &format!("user {}", username)).await?;

        response
            .json::<UserDetail>()
            .await
            .map_err(|e| ProviderError::Parse(format!("user {}: {}", username, e)))
    }

    async fn list_recent_repos(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<Repo>, ProviderError> {
        let url = format!(
            "{}/users/{}/repos?sort=pushed&per_page={}",
            self.base_url,
            urlencoding::encode(username),
            limit
        );

        let response = self.get(&url, &format!("repos of {}", username)).await?;

        response
            .json::<Vec<Repo>>()
            .await
            .map_err(|e| ProviderError::Parse(format!("repos of {}: {}", username, e)))
    }
}
