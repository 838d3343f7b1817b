//! HTTP client construction with the headers the GitHub API expects.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;

use crate::github::ProviderError;

/// Build a reqwest client preconfigured for the GitHub REST API: bearer
/// auth, the v3 JSON accept header, a crate-versioned user agent, and
/// sensible timeouts.
pub fn build_http_client(token: &str, timeout: Duration) -> Result<Client, ProviderError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    let auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| ProviderError::Auth("token contains invalid header characters".into()))?;
    headers.insert(AUTHORIZATION, auth);

    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))
}
