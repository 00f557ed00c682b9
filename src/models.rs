//! Data models for the search request and the opaque search response.
//!
//! This module defines:
//! - [`SearchQuery`]: the caller-supplied search parameters for one invocation
//! - [`SortBy`]: the sort orders NewsAPI understands
//! - Helpers for the summary line printed after a successful fetch
//!
//! The response itself is deliberately *not* modeled: NewsAPI's payload is
//! treated as an opaque [`serde_json::Value`] that is persisted verbatim.
//! The only piece of it this crate ever inspects is the length of the
//! optional `articles` array.

use chrono::{Duration, NaiveDate};
use clap::ValueEnum;
use serde_json::Value;
use std::path::Path;

/// Query used when the caller supplies none (or an empty string).
pub const DEFAULT_QUERY: &str = "Apple";

/// Search parameters for a single `get-news` invocation.
///
/// Constructed fresh per invocation and never mutated. Absent dates are
/// resolved against an injected "today" via [`SearchQuery::date_window`],
/// which keeps the date-window logic deterministic under test.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text search query.
    pub query: String,
    /// Start of the date range; defaults to seven days before today.
    pub from: Option<NaiveDate>,
    /// End of the date range; defaults to today.
    pub to: Option<NaiveDate>,
    /// Page number, starting at 1. Only this one page is ever fetched.
    pub page: u32,
}

impl SearchQuery {
    /// Resolve the date range against `today`.
    ///
    /// Returns `(from, to)` where an absent `from` defaults to seven days
    /// before `today` and an absent `to` defaults to `today`.
    pub fn date_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = self.from.unwrap_or(today - Duration::days(7));
        let to = self.to.unwrap_or(today);
        (from, to)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            from: None,
            to: None,
            page: 1,
        }
    }
}

/// Sort orders accepted by NewsAPI's `everything` endpoint.
///
/// Accepted on the command line for interface compatibility; the request
/// itself always sorts by `publishedAt` (see [`crate::api`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    Relevancy,
    Popularity,
    #[value(name = "publishedAt")]
    PublishedAt,
}

/// Number of items in the response's `articles` list, zero if absent.
pub fn article_count(response: &Value) -> usize {
    response
        .get("articles")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// One-line summary printed after a successful fetch.
pub fn summary_line(response: &Value, path: &Path) -> String {
    format!(
        "Wrote {} articles to {}",
        article_count(response),
        path.display()
    )
}
