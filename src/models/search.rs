//! Search request and result-page models.

use serde::{Deserialize, Serialize};

use crate::models::{EnrichedProfile, SearchHit};

/// Fixed page size for user search calls.
pub const PAGE_SIZE: u32 = 10;

/// The search endpoint never reports more than 1000 reachable results,
/// so the total is capped at that ceiling.
pub const MAX_TOTAL_COUNT: u32 = 1000;

/// Parameters for a bio search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text matched against profile biographies. Must be non-blank.
    pub keyword: String,

    /// Optional location filter
    pub location: Option<String>,

    /// Page to fetch (1-based)
    pub page: u32,
}

impl SearchQuery {
    /// Create a query for the first page.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: None,
            page: 1,
        }
    }

    /// Set the location filter.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the page to fetch.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Whether the keyword is blank (the query must not be issued).
    pub fn is_blank(&self) -> bool {
        self.keyword.trim().is_empty()
    }

    /// Build the wire search expression: the keyword as a bio-field match,
    /// with a conjunctive location clause when a filter is set.
    ///
    /// The exact grammar (`<keyword> in:bio location:<location>`) is required
    /// for compatibility with the search endpoint.
    pub fn expression(&self) -> String {
        match &self.location {
            Some(location) if !location.trim().is_empty() => {
                format!("{} in:bio location:{}", self.keyword, location)
            }
            _ => format!("{} in:bio", self.keyword),
        }
    }
}

/// Raw response from the user search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSearchResponse {
    pub total_count: u32,
    pub items: Vec<SearchHit>,
}

/// One page of enriched search results, in provider ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Enriched profiles, ordered exactly as the search endpoint ranked them
    pub items: Vec<EnrichedProfile>,

    /// Total matching users, capped at [`MAX_TOTAL_COUNT`]
    pub total_count: u32,

    /// The page these items belong to (1-based)
    pub current_page: u32,
}

impl SearchPage {
    /// The empty page marking the no-results condition.
    pub fn empty(current_page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            current_page,
        }
    }

    /// Whether this page carries the no-results condition.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages reachable from this result set:
    /// ceil(min(total, 1000) / 10).
    pub fn total_pages(&self) -> u32 {
        self.total_count.min(MAX_TOTAL_COUNT).div_ceil(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_without_location() {
        let query = SearchQuery::new("rust developer");
        assert_eq!(query.expression(), "rust developer in:bio");
    }

    #[test]
    fn test_expression_with_location() {
        let query = SearchQuery::new("rust developer").location("Berlin");
        assert_eq!(query.expression(), "rust developer in:bio location:Berlin");
    }

    #[test]
    fn test_blank_location_is_ignored() {
        let query = SearchQuery::new("rust").location("   ");
        assert_eq!(query.expression(), "rust in:bio");
    }

    #[test]
    fn test_blank_keyword_detection() {
        assert!(SearchQuery::new("").is_blank());
        assert!(SearchQuery::new("   ").is_blank());
        assert!(!SearchQuery::new("rust").is_blank());
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        assert_eq!(SearchQuery::new("rust").page(0).page, 1);
        assert_eq!(SearchQuery::new("rust").page(7).page, 7);
    }

    #[test]
    fn test_total_pages() {
        let mut page = SearchPage::empty(1);
        assert_eq!(page.total_pages(), 0);

        page.total_count = 1;
        assert_eq!(page.total_pages(), 1);

        page.total_count = 10;
        assert_eq!(page.total_pages(), 1);

        page.total_count = 11;
        assert_eq!(page.total_pages(), 2);

        page.total_count = 995;
        assert_eq!(page.total_pages(), 100);
    }

    #[test]
    fn test_total_pages_respects_reporting_ceiling() {
        let page = SearchPage {
            items: Vec::new(),
            total_count: 40_000,
            current_page: 1,
        };
        assert_eq!(page.total_pages(), 100);
    }
}
