//! URL canonicalisation for result identity.
//!
//! Different search sources frequently return the same page under
//! superficially different URLs: with and without a `www.` host prefix,
//! with tracking parameters appended, with reordered query strings, or
//! with fragments. The deduplicator keys results by the canonical form
//! so those all compare as equal.

use url::Url;

/// Tracking query parameters stripped during canonicalisation, on top
/// of the whole `utm_*` family.
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "msclkid", "ref", "si", "feature"];

/// Canonicalise a URL for deduplication comparison.
///
/// Applies the following transformations:
///
/// 1. Lowercase scheme and host (done by the parser; the path keeps its
///    case since paths are case-sensitive on most servers).
/// 2. Strip a leading `www.` from the host.
/// 3. Remove default ports (`:80` for HTTP, `:443` for HTTPS).
/// 4. Drop tracking parameters (`utm_*` and the [`TRACKING_PARAMS`]
///    list), sort what remains so parameter order is irrelevant.
/// 5. Remove the fragment and any trailing slash on a non-root path.
///
/// If the input cannot be parsed as a valid URL it is returned unchanged
/// and acts as its own identity key.
pub fn canonical_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    parsed.set_fragment(None);

    if is_default_port(&parsed) {
        let _ = parsed.set_port(None);
    }

    if let Some(bare) = parsed
        .host_str()
        .and_then(|host| host.strip_prefix("www."))
        .filter(|bare| !bare.is_empty())
        .map(str::to_owned)
    {
        let _ = parsed.set_host(Some(&bare));
    }

    let mut kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    kept.sort();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let mut pairs = parsed.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        drop(pairs);
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(&path[..path.len() - 1]);
    }

    parsed.to_string()
}

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key.as_str())
}

/// Returns `true` if the URL uses the default port for its scheme.
fn is_default_port(url: &Url) -> bool {
    matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_scheme_and_host() {
        assert_eq!(
            canonical_url("HTTPS://Example.COM/Path"),
            "https://example.com/Path"
        );
    }

    #[test]
    fn strips_www_host_prefix() {
        assert_eq!(
            canonical_url("https://www.weforum.org/reports"),
            "https://weforum.org/reports"
        );
    }

    #[test]
    fn www_and_bare_host_share_identity() {
        assert_eq!(
            canonical_url("https://www.example.com/page"),
            canonical_url("https://example.com/page")
        );
    }

    #[test]
    fn www_alone_is_not_stripped_to_an_empty_host() {
        // A (pathological) host of exactly "www." must not become empty.
        let canonical = canonical_url("https://www./page");
        assert!(!canonical.is_empty());
    }

    #[test]
    fn removes_trailing_slash() {
        assert_eq!(
            canonical_url("https://example.com/path/"),
            "https://example.com/path"
        );
    }

    #[test]
    fn preserves_root_slash() {
        assert_eq!(canonical_url("https://example.com/"), "https://example.com/");
    }

    #[test]
    fn removes_default_ports() {
        assert_eq!(
            canonical_url("http://example.com:80/path"),
            "http://example.com/path"
        );
        assert_eq!(
            canonical_url("https://example.com:443/path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn preserves_non_default_port() {
        assert_eq!(
            canonical_url("https://example.com:8080/path"),
            "https://example.com:8080/path"
        );
    }

    #[test]
    fn sorts_query_params() {
        assert_eq!(
            canonical_url("https://example.com/search?z=1&a=2&m=3"),
            "https://example.com/search?a=2&m=3&z=1"
        );
    }

    #[test]
    fn strips_entire_utm_family() {
        // Including utm_ parameters beyond the classic five.
        assert_eq!(
            canonical_url("https://example.com/page?q=rust&utm_source=x&utm_id=7&utm_whatever=y"),
            "https://example.com/page?q=rust"
        );
    }

    #[test]
    fn strips_click_identifiers() {
        assert_eq!(
            canonical_url("https://example.com/page?fbclid=abc&gclid=xyz&msclkid=123"),
            "https://example.com/page"
        );
    }

    #[test]
    fn removes_fragment() {
        assert_eq!(
            canonical_url("https://example.com/page#section"),
            "https://example.com/page"
        );
    }

    #[test]
    fn equivalent_source_variants_canonicalise_identically() {
        // The same article as DuckDuckGo and Bing typically report it.
        let a = canonical_url("https://WWW.Example.com/articles/ai-risk/?utm_source=ddg#top");
        let b = canonical_url("https://example.com/articles/ai-risk");
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_url_returned_unchanged() {
        let input = "not a url at all";
        assert_eq!(canonical_url(input), input);
    }

    #[test]
    fn empty_string_returned_unchanged() {
        assert_eq!(canonical_url(""), "");
    }
}
