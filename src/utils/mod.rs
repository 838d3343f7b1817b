//! Transport-side utilities: HTTP client construction and retry.

mod http;
mod retry;

pub use http::build_http_client;
pub use retry::{with_retry, RetryConfig};
