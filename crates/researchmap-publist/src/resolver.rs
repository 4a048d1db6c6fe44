//! Identifier resolution: free-form input to a usable permalink.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::ResearchmapClient;
use crate::config::limits;
use crate::error::{Error, Result};

/// Permalinks are one or more ASCII letters, digits, underscores, or
/// hyphens, nothing else.
static PERMALINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid permalink regex"));

/// Whether the input can be used as a permalink directly.
#[must_use]
pub fn is_permalink(input: &str) -> bool {
    PERMALINK_RE.is_match(input)
}

/// Resolve free-form input to a permalink.
///
/// Input matching the permalink pattern is returned as-is with no network
/// call. Anything else is sent to the researcher-search endpoint (capped at
/// [`limits::SEARCH_COUNT`] results) and the first hit's permalink wins.
///
/// Callers must reject empty or whitespace-only input before calling.
///
/// # Errors
///
/// [`Error::NoResearcherFound`] when the search matches nothing usable;
/// transport and status failures pass through unchanged.
pub async fn resolve_permalink(client: &ResearchmapClient, query: &str) -> Result<String> {
    if is_permalink(query) {
        tracing::debug!(permalink = query, "input already in permalink form");
        return Ok(query.to_string());
    }

    let page = client.search_researchers(query, limits::SEARCH_COUNT).await?;

    tracing::debug!(query, hits = page.items.len(), "researcher search completed");

    page.items
        .into_iter()
        .next()
        .and_then(|researcher| researcher.permalink.filter(|p| !p.is_empty()))
        .ok_or(Error::NoResearcherFound)
}
