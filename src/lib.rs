//! # gitscout
//!
//! Search GitHub users by matching free text against their profile bio,
//! optionally filtered by location, and enrich every hit with the language
//! they use most in their recently pushed repositories.
//!
//! ## Architecture
//!
//! - [`models`]: Core data structures (`SearchQuery`, `EnrichedProfile`, ...)
//! - [`github`]: The external API boundary (`GitHubProvider` trait, live
//!   client, mock)
//! - [`pipeline`]: The search aggregation pipeline (`UserSearch`)
//! - [`pagination`]: Pure page-window calculation for page pickers
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal rendering for the CLI
//!
//! The rest of an application needs exactly two entry points:
//! [`pipeline::UserSearch::search`] and [`pagination::window`].

pub mod config;
pub mod github;
pub mod models;
pub mod pagination;
pub mod pipeline;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use github::{GitHubClient, GitHubProvider, ProviderError};
pub use models::{EnrichedProfile, SearchHit, SearchPage, SearchQuery};
pub use pagination::{window, PageEntry, PaginationWindow};
pub use pipeline::{SearchError, UserSearch};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
