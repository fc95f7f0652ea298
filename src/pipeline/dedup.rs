//! Result deduplication by canonical URL.
//!
//! Single pass over the concatenated fan-out output: the first result
//! seen for each canonical URL is kept, later duplicates are dropped
//! entirely (never merged), and input order is preserved. O(n) time
//! with an O(n) auxiliary set.

use std::collections::HashSet;

use crate::types::SearchResult;

use super::canonical::canonical_url;

/// Deduplicate search results by canonical URL, first-seen-wins.
///
/// A later duplicate is discarded even if it came from a higher-quality
/// source or carries a longer snippet — an accepted simplification that
/// keeps the pass order-preserving and single-scan.
pub fn deduplicate(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    let mut unique = Vec::with_capacity(results.len());

    for result in results {
        if seen.insert(canonical_url(&result.url)) {
            unique.push(result);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(url: &str, source: &str, snippet: &str) -> SearchResult {
        SearchResult {
            title: format!("Title from {source}"),
            url: url.to_string(),
            snippet: snippet.to_string(),
            source: source.to_string(),
            relevance: None,
        }
    }

    #[test]
    fn unique_urls_pass_through_in_order() {
        let results = vec![
            make_result("https://a.com", "DuckDuckGo", "a"),
            make_result("https://b.com", "Bing", "b"),
            make_result("https://c.com", "Scholar", "c"),
        ];
        let deduped = deduplicate(results);
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0].url, "https://a.com");
        assert_eq!(deduped[1].url, "https://b.com");
        assert_eq!(deduped[2].url, "https://c.com");
    }

    #[test]
    fn duplicate_urls_keep_first_occurrence() {
        let results = vec![
            make_result("https://example.com/page", "Bing", "first snippet"),
            make_result("https://example.com/page", "Scholar", "second snippet"),
        ];
        let deduped = deduplicate(results);
        assert_eq!(deduped.len(), 1);
        // First-seen-wins: the later Scholar entry is dropped entirely,
        // even though Scholar is the higher-quality source.
        assert_eq!(deduped[0].source, "Bing");
        assert_eq!(deduped[0].snippet, "first snippet");
    }

    #[test]
    fn second_snippet_not_merged() {
        let results = vec![
            make_result("https://example.com", "DuckDuckGo", "short"),
            make_result("https://example.com", "Bing", "a much longer snippet"),
        ];
        let deduped = deduplicate(results);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].snippet, "short");
    }

    #[test]
    fn canonicalisation_merges_equivalent_urls() {
        let results = vec![
            make_result("https://Example.COM/path/", "DuckDuckGo", "a"),
            make_result("https://example.com/path", "Bing", "b"),
        ];
        let deduped = deduplicate(results);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].source, "DuckDuckGo");
    }

    #[test]
    fn www_variant_merged_with_bare_host() {
        let results = vec![
            make_result("https://www.weforum.org/reports/future-of-jobs", "Bing", "a"),
            make_result("https://weforum.org/reports/future-of-jobs", "DuckDuckGo", "b"),
        ];
        let deduped = deduplicate(results);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].source, "Bing");
    }

    #[test]
    fn tracking_params_ignored_for_identity() {
        let results = vec![
            make_result("https://example.com/page?q=rust", "DuckDuckGo", "a"),
            make_result(
                "https://example.com/page?q=rust&utm_source=twitter",
                "Brave Search",
                "b",
            ),
        ];
        let deduped = deduplicate(results);
        assert_eq!(deduped.len(), 1);
    }

    #[test]
    fn every_input_url_present_in_output() {
        let results = vec![
            make_result("https://a.com", "DuckDuckGo", ""),
            make_result("https://b.com", "Bing", ""),
            make_result("https://a.com", "Scholar", ""),
            make_result("https://c.com", "Brave Search", ""),
        ];
        let deduped = deduplicate(results);
        for url in ["https://a.com", "https://b.com", "https://c.com"] {
            assert!(
                deduped.iter().any(|r| r.url == url),
                "url {url} was falsely dropped"
            );
        }
    }

    #[test]
    fn no_two_outputs_share_a_canonical_url() {
        let results = vec![
            make_result("https://a.com/x", "DuckDuckGo", ""),
            make_result("https://a.com/x/", "Bing", ""),
            make_result("https://a.com/x#frag", "Scholar", ""),
            make_result("https://b.com", "Bing", ""),
        ];
        let deduped = deduplicate(results);
        let mut keys: Vec<String> = deduped.iter().map(|r| canonical_url(&r.url)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(deduplicate(vec![]).is_empty());
    }

    #[test]
    fn single_result_passes_through() {
        let deduped = deduplicate(vec![make_result("https://solo.com", "DuckDuckGo", "")]);
        assert_eq!(deduped.len(), 1);
    }
}
