//! Content extraction — fetches a result page and produces a bounded
//! plain-text excerpt for snippet enrichment.
//!
//! Extraction is best effort: any fetch or parse failure yields an empty
//! excerpt and never propagates. The HTML handling strips script/style
//! boilerplate, then walks a prioritised list of content-container
//! selectors and falls back to the whole body.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::config::ResearchConfig;
use crate::error::{ResearchError, Result};
use crate::http;

/// Content-container selectors tried in priority order before falling
/// back to `body`. Covers the semantic elements plus common CMS content
/// classes.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".post-content",
    ".entry-content",
    ".article-body",
    "#content",
    "body",
];

/// Elements removed wholesale before text extraction.
const BOILERPLATE_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript", "svg", "iframe",
];

/// Fetch `url` and return an extracted plain-text excerpt.
///
/// Bounded in time by [`ResearchConfig::extract_timeout_seconds`] and in
/// size by [`ResearchConfig::excerpt_max_chars`]. Any failure — timeout,
/// non-2xx, unreadable body, no extractable content — returns an empty
/// string; the enricher treats that as "no improvement available".
pub async fn fetch_excerpt(url: &str, config: &ResearchConfig) -> String {
    match try_fetch_excerpt(url, config).await {
        Ok(excerpt) => excerpt,
        Err(err) => {
            tracing::debug!(url, error = %err, "content extraction failed");
            String::new()
        }
    }
}

async fn try_fetch_excerpt(url: &str, config: &ResearchConfig) -> Result<String> {
    let client = http::build_client(
        Duration::from_secs(config.extract_timeout_seconds),
        config.user_agent.as_deref(),
    )?;

    let response = client
        .get(url)
        .header("Accept", "text/html,application/xhtml+xml")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| ResearchError::Http(format!("page fetch failed: {e}")))?
        .error_for_status()
        .map_err(|e| ResearchError::Http(format!("page HTTP error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| ResearchError::Http(format!("page read failed: {e}")))?;

    extract_excerpt(&html, config.excerpt_max_chars)
}

/// Extract a plain-text excerpt from raw HTML.
///
/// Strips boilerplate elements, selects the first non-empty content
/// container from [`CONTENT_SELECTORS`], collapses whitespace, and
/// truncates to `max_chars` at a char boundary.
///
/// # Errors
///
/// Returns [`ResearchError::Parse`] if no extractable content is found.
pub fn extract_excerpt(html: &str, max_chars: usize) -> Result<String> {
    let cleaned = strip_boilerplate(html);
    let document = Html::parse_document(&cleaned);

    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text: String = element.text().collect::<Vec<_>>().join(" ");
            let collapsed = collapse_whitespace(&text);
            if !collapsed.is_empty() {
                return Ok(truncate_chars(&collapsed, max_chars));
            }
        }
    }

    Err(ResearchError::Parse("no extractable content found".into()))
}

/// Remove boilerplate HTML elements and their content before parsing.
fn strip_boilerplate(html: &str) -> String {
    let mut result = html.to_owned();
    for tag in BOILERPLATE_TAGS {
        result = strip_tag(&result, tag);
    }
    result
}

/// Remove all instances of a specific HTML tag and its content.
///
/// Tag matching is ASCII case-insensitive. The lowercased scan copy must
/// preserve byte offsets into the original, so ASCII-only folding is
/// required here: full Unicode lowercasing can change byte lengths
/// (U+0130 folds to two code points) and would make the offsets drift on
/// pages containing such characters.
fn strip_tag(html: &str, tag: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let lower = html.to_ascii_lowercase();
    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}>");

    let mut pos = 0;
    loop {
        // Find the next opening tag (case-insensitive).
        let start = match lower[pos..].find(&open_tag) {
            Some(offset) => pos + offset,
            None => {
                result.push_str(&html[pos..]);
                break;
            }
        };

        // Verify this is actually the target tag (not e.g. <navigate> for <nav>).
        let after_tag = start + open_tag.len();
        if after_tag < lower.len() {
            let next_byte = lower.as_bytes()[after_tag];
            if next_byte != b' '
                && next_byte != b'>'
                && next_byte != b'/'
                && next_byte != b'\n'
                && next_byte != b'\r'
                && next_byte != b'\t'
            {
                result.push_str(&html[pos..after_tag]);
                pos = after_tag;
                continue;
            }
        }

        result.push_str(&html[pos..start]);

        // Skip to the matching closing tag, or past the opening tag if
        // there is none.
        let end = match lower[start..].find(&close_tag) {
            Some(offset) => start + offset + close_tag.len(),
            None => match lower[start..].find('>') {
                Some(offset) => start + offset + 1,
                None => html.len(),
            },
        };

        pos = end;
    }

    result
}

/// Collapse all runs of whitespace (including newlines) into single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate text to the given character count, respecting UTF-8 boundaries.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text.to_owned(),
    }
}
