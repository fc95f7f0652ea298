//! Scholar source — academic paper search via the Semantic Scholar
//! Graph API.
//!
//! The only scholarly source in the default set; the ranker boosts its
//! results. Paper abstracts become snippets, and papers without a
//! landing URL fall back to their Semantic Scholar page.

use crate::config::ResearchConfig;
use crate::error::ResearchError;
use crate::http;
use crate::source::SourceAdapter;
use crate::types::{SearchResult, SearchSource};
use serde::Deserialize;
use std::time::Duration;

/// Semantic Scholar paper search client. No API key required for the
/// public rate-limited tier.
pub struct ScholarAdapter;

#[derive(Debug, Deserialize)]
struct ScholarResponse {
    #[serde(default)]
    data: Vec<ScholarPaper>,
}

#[derive(Debug, Deserialize)]
struct ScholarPaper {
    #[serde(rename = "paperId")]
    paper_id: Option<String>,
    #[serde(default)]
    title: String,
    url: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
}

impl SourceAdapter for ScholarAdapter {
    async fn search(
        &self,
        query: &str,
        config: &ResearchConfig,
    ) -> Result<Vec<SearchResult>, ResearchError> {
        tracing::trace!(query, "Scholar search");

        let client = http::build_client(
            Duration::from_secs(config.source_timeout_seconds),
            config.user_agent.as_deref(),
        )?;

        let limit = config.per_source_results.to_string();

        let response = client
            .get("https://api.semanticscholar.org/graph/v1/paper/search")
            .query(&[
                ("query", query),
                ("fields", "title,abstract,url"),
                ("limit", limit.as_str()),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ResearchError::Http(format!("Scholar request failed: {e}")))?
            .error_for_status()
            .map_err(|e| ResearchError::Http(format!("Scholar HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| ResearchError::Http(format!("Scholar response read failed: {e}")))?;

        parse_scholar_response(&body, config.per_source_results)
    }

    fn source(&self) -> SearchSource {
        SearchSource::Scholar
    }
}

/// Parse a Semantic Scholar search response into search results.
///
/// Pure function over the raw payload for unit testability. Papers with
/// no title are discarded; papers with no landing URL get their Semantic
/// Scholar paper page instead, and papers with neither are dropped.
pub(crate) fn parse_scholar_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, ResearchError> {
    let response: ScholarResponse = serde_json::from_str(body)
        .map_err(|e| ResearchError::Parse(format!("Scholar response malformed: {e}")))?;

    let mut results = Vec::new();

    for paper in response.data {
        if paper.title.is_empty() {
            continue;
        }

        let url = match (paper.url, paper.paper_id) {
            (Some(url), _) if !url.is_empty() => url,
            (_, Some(id)) if !id.is_empty() => {
                format!("https://www.semanticscholar.org/paper/{id}")
            }
            _ => continue,
        };

        results.push(SearchResult {
            title: paper.title,
            url,
            snippet: paper.abstract_text.unwrap_or_default(),
            source: SearchSource::Scholar.name().to_string(),
            relevance: None,
        });

        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "Scholar results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_SCHOLAR_JSON: &str = r#"{
        "total": 3,
        "data": [
            {
                "paperId": "abc123",
                "title": "The Future of Employment: How Susceptible Are Jobs to Computerisation?",
                "url": "https://www.oxfordmartin.ox.ac.uk/publications/the-future-of-employment/",
                "abstract": "We examine the automation probability of 702 occupations."
            },
            {
                "paperId": "def456",
                "title": "Occupational Exposure to Large Language Models",
                "url": null,
                "abstract": "An early look at labour market impact potential of LLMs."
            },
            {
                "paperId": null,
                "title": "Paper with no usable link",
                "url": null,
                "abstract": "Should be discarded."
            },
            {
                "paperId": "ghi789",
                "title": "",
                "url": "https://example.edu/untitled",
                "abstract": "Untitled papers are discarded."
            }
        ]
    }"#;

    #[test]
    fn parse_mock_json_returns_results() {
        let results = parse_scholar_response(MOCK_SCHOLAR_JSON, 10).expect("should parse");
        assert_eq!(results.len(), 2);

        assert!(results[0].title.contains("Future of Employment"));
        assert!(results[0].url.contains("oxfordmartin"));
        assert!(results[0].snippet.contains("automation probability"));
        assert_eq!(results[0].source, "Scholar");
    }

    #[test]
    fn null_url_falls_back_to_paper_page() {
        let results = parse_scholar_response(MOCK_SCHOLAR_JSON, 10).expect("should parse");
        assert_eq!(
            results[1].url,
            "https://www.semanticscholar.org/paper/def456"
        );
    }

    #[test]
    fn papers_without_title_or_link_discarded() {
        let results = parse_scholar_response(MOCK_SCHOLAR_JSON, 10).expect("should parse");
        assert!(results.iter().all(|r| !r.title.is_empty() && !r.url.is_empty()));
    }

    #[test]
    fn parse_respects_per_source_cap() {
        let results = parse_scholar_response(MOCK_SCHOLAR_JSON, 1).expect("should parse");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn empty_data_yields_empty() {
        let results = parse_scholar_response(r#"{"total": 0, "data": []}"#, 10)
            .expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn missing_data_field_yields_empty() {
        let results = parse_scholar_response(r#"{"total": 0}"#, 10).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = parse_scholar_response("<html>rate limited</html>", 10);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Scholar response malformed"));
    }

    #[test]
    fn source_is_scholar() {
        let adapter = ScholarAdapter;
        assert_eq!(adapter.source(), SearchSource::Scholar);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScholarAdapter>();
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_scholar_search() {
        let adapter = ScholarAdapter;
        let config = ResearchConfig::default();
        let results = adapter
            .search("occupation automation risk", &config)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
        for r in &results {
            assert!(!r.title.is_empty());
            assert!(!r.url.is_empty());
            assert_eq!(r.source, "Scholar");
        }
    }
}
