//! Error types for the fetch pipeline.
//!
//! The taxonomy mirrors the three ways an invocation can fail after
//! configuration has been validated:
//!
//! - [`FetchError::Transport`]: the HTTP exchange itself failed (timeout,
//!   DNS, connection refused). Never retried.
//! - [`FetchError::Decode`]: the response body was not valid JSON.
//! - [`FetchError::Persist`]: the output file could not be written.
//!
//! A missing API credential is a usage error reported by the CLI layer
//! before any network activity and never reaches this type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by [`NewsClient::fetch`](crate::api::NewsClient::fetch).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed: timeout, DNS failure, connection refused,
    /// or a malformed endpoint URL.
    #[error("request to NewsAPI failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The parsed response could not be written to the output file.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Persist {
        /// Destination that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
