//! Bing source — HTML scrape of Microsoft's index as a fallback engine.

use crate::config::ResearchConfig;
use crate::error::ResearchError;
use crate::http;
use crate::source::SourceAdapter;
use crate::types::{SearchResult, SearchSource};
use scraper::{Html, Selector};
use std::time::Duration;

/// Bing HTML search scraper.
///
/// Keyless fallback with an index independent from DuckDuckGo's
/// upstream. Organic results live in `li.b_algo` containers.
pub struct BingAdapter;

impl SourceAdapter for BingAdapter {
    async fn search(
        &self,
        query: &str,
        config: &ResearchConfig,
    ) -> Result<Vec<SearchResult>, ResearchError> {
        tracing::trace!(query, "Bing search");

        let client = http::build_client(
            Duration::from_secs(config.source_timeout_seconds),
            config.user_agent.as_deref(),
        )?;

        let safesearch_val = if config.safe_search { "Strict" } else { "Off" };

        let response = client
            .get("https://www.bing.com/search")
            .query(&[
                ("q", query),
                ("setlang", "en"),
                ("safeSearch", safesearch_val),
            ])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| ResearchError::Http(format!("Bing request failed: {e}")))?
            .error_for_status()
            .map_err(|e| ResearchError::Http(format!("Bing HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| ResearchError::Http(format!("Bing response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Bing response received");

        parse_bing_html(&html, config.per_source_results)
    }

    fn source(&self) -> SearchSource {
        SearchSource::Bing
    }
}

/// Parse Bing HTML response into search results.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_bing_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, ResearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse("li.b_algo")
        .map_err(|e| ResearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse("h2")
        .map_err(|e| ResearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let link_sel = Selector::parse("a")
        .map_err(|e| ResearchError::Parse(format!("invalid link selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".b_caption p, .b_lineclamp2")
        .map_err(|e| ResearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        // URL lives in h2 > a[href].
        let url = title_el
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|h| h.to_string());

        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => continue,
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            source: SearchSource::Bing.name().to_string(),
            relevance: None,
        });

        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "Bing results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_BING_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<ol id="b_results">
<li class="b_algo">
  <h2><a href="https://www.oxfordmartin.ox.ac.uk/publications/the-future-of-employment/" h="ID=SERP">The Future of Employment</a></h2>
  <div class="b_caption"><p>How susceptible are jobs to computerisation? A study of automation probability.</p></div>
</li>
<li class="b_algo">
  <h2><a href="https://www.mckinsey.com/featured-insights/future-of-work" h="ID=SERP">The future of work after COVID-19</a></h2>
  <div class="b_caption"><p>Research on workforce transitions and automation.</p></div>
</li>
<li class="b_algo">
  <h2><a href="https://en.wikipedia.org/wiki/Automation" h="ID=SERP">Automation - Wikipedia</a></h2>
  <div class="b_caption"><p>Automation describes a wide range of technologies.</p></div>
</li>
</ol>
</body>
</html>"#;

    #[test]
    fn parse_mock_html_returns_results() {
        let results = parse_bing_html(MOCK_BING_HTML, 10).expect("should parse");
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "The Future of Employment");
        assert!(results[0].url.contains("oxfordmartin"));
        assert!(results[0].snippet.contains("automation probability"));
        assert_eq!(results[0].source, "Bing");

        assert!(results[1].url.contains("mckinsey.com"));
        assert!(results[2].url.contains("wikipedia.org"));
    }

    #[test]
    fn parse_respects_per_source_cap() {
        let results = parse_bing_html(MOCK_BING_HTML, 2).expect("should parse");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let results = parse_bing_html("<html><body></body></html>", 10);
        assert!(results.expect("should parse").is_empty());
    }

    #[test]
    fn entries_without_link_discarded() {
        let html = r#"<html><body><ol>
<li class="b_algo"><h2>Title without a link</h2>
  <div class="b_caption"><p>No href anywhere.</p></div></li>
</ol></body></html>"#;
        let results = parse_bing_html(html, 10).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn source_is_bing() {
        let adapter = BingAdapter;
        assert_eq!(adapter.source(), SearchSource::Bing);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BingAdapter>();
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_bing_search() {
        let adapter = BingAdapter;
        let config = ResearchConfig::default();
        let results = adapter
            .search("nurse automation risk study", &config)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
        for r in &results {
            assert!(!r.title.is_empty());
            assert!(!r.url.is_empty());
        }
    }
}
