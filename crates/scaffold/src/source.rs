//! Retrieval of remote class models.

use anyhow::Context;

/// Download the class model body from a URL.
pub fn fetch(url: &str) -> anyhow::Result<String> {
    tracing::debug!(url, "fetching class model");
    let body = ureq::get(url)
        .call()
        .with_context(|| format!("failed to fetch {}", url))?
        .into_string()
        .context("failed to read response body")?;
    Ok(body)
}
