//! Fetching vocabulary documents over HTTP

use tracing::info;
use vocab_core::prelude::*;

/// Download a vocabulary document
///
/// A non-success status aborts the whole run; nothing is compiled from a
/// partial or error response.
///
/// # Errors
///
/// Returns `VocabError::FetchError` on transport failure or non-success status.
pub async fn fetch_document(url: &str) -> Result<Vec<u8>> {
    info!(url, "Fetching vocabulary document");

    let response = reqwest::get(url)
        .await
        .map_err(|e| VocabError::fetch(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(VocabError::fetch(url, format!("HTTP {status}")));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| VocabError::fetch(url, e.to_string()))?;

    info!(url, bytes = body.len(), "Fetched vocabulary document");
    Ok(body.to_vec())
}

/// Whether an input location should be fetched rather than read from disk
#[must_use]
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
