//! Scripted provider for testing the pipeline without a network.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::github::{GitHubProvider, ProviderError};
use crate::models::{Repo, SearchHit, UserDetail, UserSearchResponse};

/// A mock provider that returns predefined responses and counts calls.
///
/// Usernames registered via [`MockProvider::fail_user`] or
/// [`MockProvider::fail_repos`] answer with a transport error, which lets
/// tests exercise the degraded-enrichment path deterministically.
#[derive(Debug, Default)]
pub struct MockProvider {
    search_response: Mutex<Option<UserSearchResponse>>,
    search_fails: AtomicBool,
    users: Mutex<HashMap<String, UserDetail>>,
    failing_users: Mutex<HashSet<String>>,
    repos: Mutex<HashMap<String, Vec<Repo>>>,
    failing_repos: Mutex<HashSet<String>>,
    search_calls: AtomicUsize,
    user_calls: AtomicUsize,
    repo_calls: AtomicUsize,
}

impl MockProvider {
    /// Create a mock with no scripted data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the search response.
    pub fn set_search_response(&self, response: UserSearchResponse) {
        *self.search_response.lock().unwrap() = Some(response);
    }

    /// Make the search call itself fail with a network error.
    pub fn fail_search(&self) {
        self.search_fails.store(true, Ordering::SeqCst);
    }

    /// Register a full profile record for a username.
    pub fn insert_user(&self, detail: UserDetail) {
        self.users
            .lock()
            .unwrap()
            .insert(detail.login.clone(), detail);
    }

    /// Make profile fetches for this username fail.
    pub fn fail_user(&self, username: &str) {
        self.failing_users
            .lock()
            .unwrap()
            .insert(username.to_string());
    }

    /// Script the repository list for a username.
    pub fn set_repos(&self, username: &str, repos: Vec<Repo>) {
        self.repos
            .lock()
            .unwrap()
            .insert(username.to_string(), repos);
    }

    /// Make repository listings for this username fail.
    pub fn fail_repos(&self, username: &str) {
        self.failing_repos
            .lock()
            .unwrap()
            .insert(username.to_string());
    }

    /// Number of search calls issued so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of profile fetches issued so far.
    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    /// Number of repository listings issued so far.
    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubProvider for MockProvider {
    async fn search_users(
        &self,
        _expression: &str,
        _page: u32,
        _per_page: u32,
    ) -> Result<UserSearchResponse, ProviderError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if self.search_fails.load(Ordering::SeqCst) {
            return Err(ProviderError::Network("connection refused".to_string()));
        }

        let guard = self.search_response.lock().unwrap();
        match &*guard {
            Some(response) => Ok(response.clone()),
            None => Ok(UserSearchResponse {
                total_count: 0,
                items: Vec::new(),
            }),
        }
    }

    async fn get_user(&self, username: &str) -> Result<UserDetail, ProviderError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_users.lock().unwrap().contains(username) {
            return Err(ProviderError::Network("connection reset".to_string()));
        }

        self.users
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(username.to_string()))
    }

    async fn list_recent_repos(
        &self,
        username: &str,
        _limit: u32,
    ) -> Result<Vec<Repo>, ProviderError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_repos.lock().unwrap().contains(username) {
            return Err(ProviderError::RateLimit);
        }

        Ok(self
            .repos
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .unwrap_or_default())
    }
}

/// Build a search hit for tests.
pub fn make_hit(login: &str, id: u64) -> SearchHit {
    SearchHit {
        login: login.to_string(),
        id,
        avatar_url: format!("https://avatars.example.com/u/{}", id),
        html_url: format!("https://github.com/{}", login),
    }
}

/// Build a full profile record for tests.
pub fn make_detail(login: &str, id: u64) -> UserDetail {
    UserDetail {
        login: login.to_string(),
        id,
        avatar_url: format!("https://avatars.example.com/u/{}", id),
        html_url: format!("https://github.com/{}", login),
        name: Some(format!("{} name", login)),
        bio: Some(format!("{} writes software", login)),
        location: Some("Berlin".to_string()),
        blog: None,
        twitter_username: None,
        company: Some("@example".to_string()),
        followers: 12,
        following: 3,
    }
}
