//! Core data structures for search queries, user profiles, and result pages.

mod search;
mod user;

pub use search::{SearchPage, SearchQuery, UserSearchResponse, MAX_TOTAL_COUNT, PAGE_SIZE};
pub use user::{EnrichedProfile, Repo, SearchHit, UserDetail};
