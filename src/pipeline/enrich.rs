//! Snippet enrichment for top-ranked results.
//!
//! Fetches page content concurrently for the top K ranked results and
//! swaps in the extracted excerpt when it is a strict improvement over
//! the snippet the search source provided. Enrichment never shortens a
//! snippet; extraction failures leave the result untouched.

use crate::config::ResearchConfig;
use crate::extract::{self, truncate_chars};
use crate::types::SearchResult;

/// Enrich the top `config.enrich_top` results in place.
///
/// For each of the top K results, the page at its URL is fetched and a
/// plain-text excerpt extracted (concurrently, each with its own
/// timeout). The excerpt — truncated to the display cap — replaces the
/// existing snippet only if it is strictly longer. Results beyond the
/// top K keep their original snippets.
pub async fn enrich(results: Vec<SearchResult>, config: &ResearchConfig) -> Vec<SearchResult> {
    let top = results.len().min(config.enrich_top);
    if top == 0 {
        return results;
    }

    let excerpts = futures::future::join_all(
        results[..top]
            .iter()
            .map(|result| extract::fetch_excerpt(&result.url, config)),
    )
    .await;

    apply_excerpts(results, excerpts, config.snippet_display_chars)
}

/// Merge fetched excerpts into the leading results.
///
/// Split out from [`enrich`] so the replace-if-longer policy is testable
/// without network access.
pub(crate) fn apply_excerpts(
    mut results: Vec<SearchResult>,
    excerpts: Vec<String>,
    display_chars: usize,
) -> Vec<SearchResult> {
    for (result, excerpt) in results.iter_mut().zip(excerpts) {
        let replacement = truncate_chars(&excerpt, display_chars);
        if replacement.chars().count() > result.snippet.chars().count() {
            tracing::debug!(url = %result.url, chars = replacement.len(), "snippet enriched");
            result.snippet = replacement;
        }
    }
    results
}
