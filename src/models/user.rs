//! User profile models, from the minimal search hit to the enriched row.

use serde::{Deserialize, Serialize};

/// A minimal profile stub as returned by the user search endpoint.
///
/// Carries identity fields only; everything else comes from a follow-up
/// profile fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Username (login handle)
    pub login: String,

    /// Numeric user id
    pub id: u64,

    /// Avatar image URL
    pub avatar_url: String,

    /// Profile page URL
    pub html_url: String,
}

/// Full profile record from the `/users/{username}` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

/// A repository as seen by language inference. Only the primary language
/// matters; repositories are ordered most-recently-pushed-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub language: Option<String>,
}

impl Repo {
    /// Create a repo with the given primary language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }

    /// Create a repo with no recorded primary language.
    pub fn without_language() -> Self {
        Self { language: None }
    }
}

/// A search hit merged with its full profile and inferred dominant language.
///
/// Built either from a successful profile fetch via [`EnrichedProfile::from_detail`]
/// or, when any enrichment sub-call fails, from the originating hit via
/// [`EnrichedProfile::degraded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProfile {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub company: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub dominant_language: Option<String>,
}

impl EnrichedProfile {
    /// Merge a full profile record with an inferred dominant language.
    ///
    /// The API reports missing text fields inconsistently (sometimes `null`,
    /// sometimes an empty string); both normalize to `None`.
    pub fn from_detail(detail: UserDetail, dominant_language: Option<String>) -> Self {
        Self {
            name: non_blank(detail.name),
            bio: non_blank(detail.bio),
            location: non_blank(detail.location),
            blog: non_blank(detail.blog),
            twitter_username: non_blank(detail.twitter_username),
            company: non_blank(detail.company),
            followers: detail.followers,
            following: detail.following,
            login: detail.login,
            id: detail.id,
            avatar_url: detail.avatar_url,
            html_url: detail.html_url,
            dominant_language,
        }
    }

    /// Best-effort stub built solely from the originating search hit.
    ///
    /// Identity fields survive so the row is still renderable; the display
    /// name falls back to the login.
    pub fn degraded(hit: &SearchHit) -> Self {
        Self {
            login: hit.login.clone(),
            id: hit.id,
            avatar_url: hit.avatar_url.clone(),
            html_url: hit.html_url.clone(),
            name: Some(hit.login.clone()),
            bio: None,
            location: None,
            blog: None,
            twitter_username: None,
            company: None,
            followers: 0,
            following: 0,
            dominant_language: None,
        }
    }

    /// Display name for rendering: the profile name, or the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(login: &str) -> SearchHit {
        SearchHit {
            login: login.to_string(),
            id: 42,
            avatar_url: format!("https://avatars.example.com/{}", login),
            html_url: format!("https://github.com/{}", login),
        }
    }

    #[test]
    fn test_degraded_keeps_identity_fields() {
        let profile = EnrichedProfile::degraded(&hit("octocat"));

        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.id, 42);
        assert_eq!(profile.avatar_url, "https://avatars.example.com/octocat");
        assert_eq!(profile.html_url, "https://github.com/octocat");
        assert_eq!(profile.name.as_deref(), Some("octocat"));
        assert_eq!(profile.bio, None);
        assert_eq!(profile.location, None);
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.following, 0);
        assert_eq!(profile.dominant_language, None);
    }

    #[test]
    fn test_from_detail_normalizes_empty_strings() {
        let detail = UserDetail {
            login: "octocat".to_string(),
            id: 42,
            avatar_url: "https://avatars.example.com/octocat".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: Some("".to_string()),
            location: Some("San Francisco".to_string()),
            blog: Some("  ".to_string()),
            twitter_username: None,
            company: Some("@github".to_string()),
            followers: 1000,
            following: 9,
        };

        let profile = EnrichedProfile::from_detail(detail, Some("Ruby".to_string()));

        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio, None);
        assert_eq!(profile.blog, None);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(profile.company.as_deref(), Some("@github"));
        assert_eq!(profile.dominant_language.as_deref(), Some("Ruby"));
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let mut profile = EnrichedProfile::degraded(&hit("octocat"));
        profile.name = None;
        assert_eq!(profile.display_name(), "octocat");

        profile.name = Some("The Octocat".to_string());
        assert_eq!(profile.display_name(), "The Octocat");
    }
}
