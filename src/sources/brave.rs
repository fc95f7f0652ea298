//! Brave Search source — JSON Web Search API with an independent index.
//!
//! Requires a subscription token ([`ResearchConfig::brave_api_key`]);
//! without one the adapter fails soft and the aggregation proceeds on
//! the keyless sources.

use crate::config::ResearchConfig;
use crate::error::ResearchError;
use crate::http;
use crate::source::SourceAdapter;
use crate::types::{SearchResult, SearchSource};
use serde::Deserialize;
use std::time::Duration;

/// Brave Web Search API client.
pub struct BraveAdapter;

/// Shape of the Brave API response, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct BraveResponse {
    web: Option<BraveWeb>,
}

#[derive(Debug, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveWebResult>,
}

#[derive(Debug, Deserialize)]
struct BraveWebResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
}

impl SourceAdapter for BraveAdapter {
    async fn search(
        &self,
        query: &str,
        config: &ResearchConfig,
    ) -> Result<Vec<SearchResult>, ResearchError> {
        let Some(api_key) = config.brave_api_key.as_deref() else {
            return Err(ResearchError::Config(
                "Brave API key not configured".into(),
            ));
        };

        tracing::trace!(query, "Brave search");

        let client = http::build_client(
            Duration::from_secs(config.source_timeout_seconds),
            config.user_agent.as_deref(),
        )?;

        let response = client
            .get("https://api.search.brave.com/res/v1/web/search")
            .query(&[("q", query)])
            .header("Accept", "application/json")
            .header("X-Subscription-Token", api_key)
            .send()
            .await
            .map_err(|e| ResearchError::Http(format!("Brave request failed: {e}")))?
            .error_for_status()
            .map_err(|e| ResearchError::Http(format!("Brave HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| ResearchError::Http(format!("Brave response read failed: {e}")))?;

        parse_brave_response(&body, config.per_source_results)
    }

    fn source(&self) -> SearchSource {
        SearchSource::Brave
    }
}

/// Parse a Brave Web Search API JSON body into search results.
///
/// Pure function over the raw payload for unit testability; entries
/// missing a title or URL are discarded.
pub(crate) fn parse_brave_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, ResearchError> {
    let response: BraveResponse = serde_json::from_str(body)
        .map_err(|e| ResearchError::Parse(format!("Brave response malformed: {e}")))?;

    let raw = response.web.map(|w| w.results).unwrap_or_default();

    let results: Vec<SearchResult> = raw
        .into_iter()
        .filter(|r| !r.title.is_empty() && !r.url.is_empty())
        .take(max_results)
        .map(|r| SearchResult {
            title: r.title,
            url: r.url,
            snippet: r.description,
            source: SearchSource::Brave.name().to_string(),
            relevance: None,
        })
        .collect();

    tracing::debug!(count = results.len(), "Brave results parsed");
    Ok(results)
}
