//! The search aggregation pipeline.
//!
//! [`UserSearch`] issues the paginated bio search, fans out per-hit
//! enrichment concurrently, and assembles the result page. Enrichment of a
//! single hit can never fail the batch: a failed profile fetch degrades that
//! one row to a stub built from the original hit, and a failed language
//! inference only leaves the language absent.

mod language;

pub use language::RECENT_REPO_LIMIT;

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::github::GitHubProvider;
use crate::models::{
    EnrichedProfile, SearchHit, SearchPage, SearchQuery, MAX_TOTAL_COUNT, PAGE_SIZE,
};

/// Errors that can cross the pipeline boundary.
///
/// Per-hit enrichment failures never appear here; only an invalid query or a
/// failure of the top-level search call does.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The keyword was blank; the query was not issued
    #[error("Search keyword must not be blank")]
    EmptyKeyword,

    /// The search call itself failed
    #[error(transparent)]
    Provider(#[from] crate::github::ProviderError),
}

/// The search aggregation service.
///
/// Stateless between calls; each [`UserSearch::search`] is idempotent with
/// respect to the external data at call time.
#[derive(Debug, Clone)]
pub struct UserSearch {
    provider: Arc<dyn GitHubProvider>,
}

impl UserSearch {
    /// Create the service over a provider implementation.
    pub fn new(provider: Arc<dyn GitHubProvider>) -> Self {
        Self { provider }
    }

    /// Run a bio search and enrich every hit on the requested page.
    ///
    /// Returns the empty page (the no-results condition) when the search
    /// matches nothing; in that case no enrichment call is issued. Item order
    /// always equals the provider's ranking order.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage, SearchError> {
        if query.is_blank() {
            return Err(SearchError::EmptyKeyword);
        }

        let expression = query.expression();
        debug!(%expression, page = query.page, "issuing user search");

        let response = self
            .provider
            .search_users(&expression, query.page, PAGE_SIZE)
            .await?;

        if response.items.is_empty() {
            debug!(%expression, "search matched no users");
            return Ok(SearchPage::empty(query.page));
        }

        // One enrichment future per hit, joined positionally: each outcome
        // lands in the slot of its originating hit, so ranking order is
        // preserved no matter which enrichment finishes first.
        let items = join_all(response.items.iter().map(|hit| self.enrich(hit))).await;

        Ok(SearchPage {
            items,
            total_count: response.total_count.min(MAX_TOTAL_COUNT),
            current_page: query.page,
        })
    }

    /// Enrich a single hit. Never fails outward.
    async fn enrich(&self, hit: &SearchHit) -> EnrichedProfile {
        let (detail, dominant_language) = tokio::join!(
            self.provider.get_user(&hit.login),
            language::infer_dominant_language(self.provider.as_ref(), &hit.login),
        );

        match detail {
            Ok(detail) => EnrichedProfile::from_detail(detail, dominant_language),
            Err(err) => {
                warn!(login = %hit.login, %err, "profile fetch failed, degrading to stub");
                EnrichedProfile::degraded(hit)
            }
        }
    }
}
