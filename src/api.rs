//! NewsAPI search client.
//!
//! This module provides [`NewsClient`], the component that performs the
//! external search request and persists the response locally. One call to
//! [`NewsClient::fetch`] means exactly one HTTP GET: there is no retry
//! logic, no pagination traversal, and no rate-limit handling.
//!
//! # Request Shape
//!
//! The request targets NewsAPI's `everything` endpoint with the query
//! parameters `q`, `from`, `to`, `sortBy`, `pageSize`, `page`, and `apiKey`.
//! Sort order and page size are fixed at `publishedAt` and 100; only the
//! query text, the date range, and the page number vary per invocation.
//!
//! # Persistence
//!
//! The response body is parsed as JSON and written pretty-printed to
//! `output.json` in the working directory, fully overwriting any previous
//! contents. NewsAPI's own status reporting lives inside the JSON body, so
//! the HTTP status code is not checked: an error payload is persisted just
//! like a successful one.

use crate::error::FetchError;
use crate::models::SearchQuery;
use crate::outputs::json::write_response;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// NewsAPI `everything` search endpoint.
pub const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Fixed destination for the fetched response, relative to the working
/// directory.
pub const OUTPUT_FILE: &str = "output.json";

/// Sort order sent with every request.
const SORT_BY: &str = "publishedAt";

/// Page size sent with every request.
const PAGE_SIZE: u32 = 100;

/// How long a single request may take before it fails instead of hanging.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters for one search request, in NewsAPI's wire naming.
///
/// The page number is sent under the literal key `page`.
#[derive(Serialize)]
struct RequestParams<'a> {
    q: &'a str,
    from: String,
    to: String,
    #[serde(rename = "sortBy")]
    sort_by: &'static str,
    #[serde(rename = "pageSize")]
    page_size: u32,
    page: u32,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

/// Client for fetching search results from NewsAPI.
///
/// Holds the API credential and a preconfigured HTTP client with a bounded
/// timeout. The endpoint URL and output path are fixed; the builder-style
/// overrides exist so tests can point the client at a mock server and a
/// temporary directory.
pub struct NewsClient {
    api_key: String,
    base_url: String,
    output_path: PathBuf,
    http: reqwest::Client,
}

impl fmt::Debug for NewsClient {
    // api_key intentionally left out
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.base_url)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl NewsClient {
    /// Create a new client holding `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: NEWS_API_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
            http,
        })
    }

    /// Override the search endpoint. Used by tests to target a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the output file path. Used by tests to write into a
    /// temporary directory.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Where the next fetched response will be written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Fetch one page of search results and persist them.
    ///
    /// Absent dates in `query` are resolved against `today`: `from` defaults
    /// to seven days before, `to` to `today` itself. Passing "today" in
    /// explicitly keeps the date window deterministic under test.
    ///
    /// On success the parsed response is both written to
    /// [`output_path`](Self::output_path) and returned to the caller.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`]: the exchange failed (timeout, DNS,
    ///   connection refused)
    /// - [`FetchError::Decode`]: the body was not valid JSON; nothing is
    ///   written
    /// - [`FetchError::Persist`]: the output file could not be written
    #[instrument(level = "info", skip(self), fields(query = %query.query, page = query.page))]
    pub async fn fetch(
        &self,
        query: &SearchQuery,
        today: NaiveDate,
    ) -> Result<Value, FetchError> {
        let (from, to) = query.date_window(today);
        let params = RequestParams {
            q: &query.query,
            from: from.to_string(),
            to: to.to_string(),
            sort_by: SORT_BY,
            page_size: PAGE_SIZE,
            page: query.page,
            api_key: &self.api_key,
        };

        let t0 = Instant::now();
        let response = self.http.get(&self.base_url).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        info!(
            %status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched search results"
        );

        // NewsAPI signals its own errors inside the JSON body; the payload
        // is persisted regardless of the HTTP status code.
        let data: Value = serde_json::from_str(&body)?;
        write_response(&data, &self.output_path).await?;

        Ok(data)
    }
}
