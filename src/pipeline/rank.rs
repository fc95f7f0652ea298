//! Heuristic relevance ranking.
//!
//! Assigns each result an additive score from independent substring
//! checks against the job title and the result's own fields, then sorts
//! descending. The weights are a cheap, explainable heuristic — an
//! unnormalised ordering key, not a calibrated probability.
//!
//! Ranking is a pure transformation: scores are recomputed from a fixed
//! base of 1.0 on every call, so ranking an already-ranked sequence is a
//! no-op and stale scores can never accumulate across passes.

use chrono::Datelike;
use std::cmp::Ordering;

use crate::types::{SearchResult, SearchSource};

/// Policy/consulting institutions whose URLs receive an authority boost.
const POLICY_DOMAINS: &[&str] = &["weforum", "mckinsey", "brookings", "oecd"];

/// Base score every result starts from.
const BASE_SCORE: f64 = 1.0;

/// Rank results for a job title: assign relevance scores and sort
/// descending. The sort is stable, so equal scores preserve input order.
pub fn rank(results: Vec<SearchResult>, job: &str) -> Vec<SearchResult> {
    rank_as_of(results, job, chrono::Utc::now().year())
}

/// [`rank`] with an explicit "current year" for the recency signal.
/// Exposed for deterministic tests.
pub fn rank_as_of(results: Vec<SearchResult>, job: &str, current_year: i32) -> Vec<SearchResult> {
    let job_lower = job.to_lowercase();
    let recent_years = [current_year.to_string(), (current_year - 1).to_string()];

    let mut ranked: Vec<SearchResult> = results
        .into_iter()
        .map(|result| {
            let score = score_result(&result, &job_lower, &recent_years);
            SearchResult {
                relevance: Some(score),
                ..result
            }
        })
        .collect();

    // Vec::sort_by is stable: ties keep their input order.
    ranked.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

/// Score one result against the lower-cased job title.
///
/// All signals are additive and independent:
///
/// | signal | weight |
/// |---|---|
/// | title contains job title | +0.5 |
/// | title mentions "ai"/"artificial intelligence" | +0.3 |
/// | title mentions an automation stem | +0.3 |
/// | title mentions "replace" | +0.2 |
/// | title mentions "study"/"research" | +0.4 |
/// | scholarly source | +0.5 |
/// | .edu URL | +0.4 |
/// | .gov URL | +0.3 |
/// | policy/consulting institution URL | +0.3 |
/// | snippet mentions current or prior year | +0.3 |
fn score_result(result: &SearchResult, job_lower: &str, recent_years: &[String]) -> f64 {
    let mut score = BASE_SCORE;

    let title = result.title.to_lowercase();
    if title.contains(job_lower) {
        score += 0.5;
    }
    if title.contains("ai") || title.contains("artificial intelligence") {
        score += 0.3;
    }
    if title.contains("automat") {
        score += 0.3;
    }
    if title.contains("replace") {
        score += 0.2;
    }
    if title.contains("study") || title.contains("research") {
        score += 0.4;
    }

    if SearchSource::parse(&result.source).is_some_and(|s| s.is_scholarly()) {
        score += 0.5;
    }
    if result.url.contains(".edu") {
        score += 0.4;
    }
    if result.url.contains(".gov") {
        score += 0.3;
    }
    if POLICY_DOMAINS.iter().any(|d| result.url.contains(d)) {
        score += 0.3;
    }

    let snippet = result.snippet.to_lowercase();
    if recent_years.iter().any(|y| snippet.contains(y.as_str())) {
        score += 0.3;
    }

    score
}
