//! Keyword-heuristic risk summary.
//!
//! A pure classifier over the lower-cased concatenation of every result
//! title and snippet. Each dimension uses an explicit, test-covered
//! priority order: the first matching phrase set wins.

use crate::types::{RiskLevel, RiskSummary, SearchResult, Timeline};

/// High-risk phrases; checked before the low-risk set, so a corpus
/// matching both classifies as High.
const HIGH_RISK_PHRASES: &[&str] = &["high risk", "likely to be replaced"];

/// Low-risk phrases.
const LOW_RISK_PHRASES: &[&str] = &["low risk", "difficult to automate"];

/// Timeline phrase sets in priority order, most specific first:
/// present-tense signals beat long-term signals beat decade signals.
/// "20 years" is checked before "10 years" so that "10-20 years" text
/// lands in the long-term bucket.
const TIMELINE_RULES: &[(&[&str], Timeline)] = &[
    (&["already", "immediate"], Timeline::AlreadyHappening),
    (&["20 years", "long term"], Timeline::Next10to20Years),
    (&["next decade", "10 years"], Timeline::Next10Years),
];

/// Keyword categories mapped to fixed factor labels, evaluated in order.
const FACTOR_RULES: &[(&str, &str)] = &[
    ("repetitive", "Contains repetitive tasks"),
    ("creativ", "Requires creativity"),
    ("emotional", "Involves emotional intelligence"),
    ("physical", "Requires physical presence"),
    ("complex", "Involves complex decision making"),
];

/// Maximum number of key factors in a summary.
const MAX_FACTORS: usize = 5;

/// Derive a risk summary from the enriched, ranked corpus.
///
/// An empty corpus yields the all-defaults summary (Medium risk, no
/// factors, "Next 5-10 years").
pub fn summarize(results: &[SearchResult]) -> RiskSummary {
    let text = results
        .iter()
        .map(|r| format!("{} {}", r.title, r.snippet))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    RiskSummary {
        risk_level: classify_risk(&text),
        key_factors: collect_factors(&text),
        timeline: classify_timeline(&text),
    }
}

fn classify_risk(text: &str) -> RiskLevel {
    if contains_any(text, HIGH_RISK_PHRASES) {
        RiskLevel::High
    } else if contains_any(text, LOW_RISK_PHRASES) {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

fn classify_timeline(text: &str) -> Timeline {
    for (phrases, timeline) in TIMELINE_RULES {
        if contains_any(text, phrases) {
            return *timeline;
        }
    }
    Timeline::Next5to10Years
}

fn collect_factors(text: &str) -> Vec<String> {
    FACTOR_RULES
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, label)| (*label).to_string())
        .take(MAX_FACTORS)
        .collect()
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}
