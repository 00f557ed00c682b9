//! JSON persistence for fetched search responses.
//!
//! The response is written pretty-printed so the file is readable as-is.
//! serde_json's writer emits UTF-8 without escaping non-ASCII characters,
//! so article titles and bodies survive byte-for-byte. Each write fully
//! overwrites the previous file; there are no append semantics and no
//! history.

use crate::error::FetchError;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a fetched response to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns [`FetchError::Persist`] if the file cannot be created or
/// written (permissions, missing parent directory, disk full).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_response(response: &Value, path: &Path) -> Result<(), FetchError> {
    let json = serde_json::to_string_pretty(response)?;

    if let Err(e) = fs::write(path, json).await {
        error!(path = %path.display(), error = %e, "Failed to write response");
        return Err(FetchError::Persist {
            path: path.to_path_buf(),
            source: e,
        });
    }
    info!(path = %path.display(), "Wrote search response");

    Ok(())
}
