//! Core types: search results, source identification, and the final report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single result discovered by one of the search sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page. Adapters discard entries with empty titles.
    pub title: String,
    /// Absolute URL of the result. Identity key for deduplication (after
    /// canonicalisation); unique only once the deduplicator has run.
    pub url: String,
    /// Short descriptive text. May be empty; the enricher may replace it
    /// with a longer extracted excerpt.
    #[serde(default)]
    pub snippet: String,
    /// Name of the source adapter that discovered this result.
    #[serde(default)]
    pub source: String,
    /// Relevance score assigned by the ranker. `None` until ranking runs;
    /// the ranker always produces fresh values rather than accumulating
    /// onto previous ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

/// Search sources riskscout can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchSource {
    /// DuckDuckGo — HTML-only endpoint, most scraper-friendly.
    DuckDuckGo,
    /// Bing — HTML scrape, decent fallback index.
    Bing,
    /// Brave Search — JSON Web Search API, needs a subscription token.
    Brave,
    /// Semantic Scholar — academic paper search, weighted up by the ranker.
    Scholar,
}

impl SearchSource {
    /// Human-readable name, also stored on [`SearchResult::source`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
            Self::Brave => "Brave Search",
            Self::Scholar => "Scholar",
        }
    }

    /// Best-effort parse of a source name string back to a variant.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "DuckDuckGo" => Some(Self::DuckDuckGo),
            "Bing" => Some(Self::Bing),
            "Brave Search" => Some(Self::Brave),
            "Scholar" => Some(Self::Scholar),
            _ => None,
        }
    }

    /// Whether this is an academic/scholarly source. Results from
    /// scholarly sources receive a ranking boost.
    pub fn is_scholarly(&self) -> bool {
        matches!(self, Self::Scholar)
    }

    /// All available source variants.
    pub fn all() -> &'static [SearchSource] {
        &[Self::DuckDuckGo, Self::Bing, Self::Brave, Self::Scholar]
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse automation-risk classification derived by the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low automation risk signals dominate.
    Low,
    /// Default when neither phrase set matches.
    Medium,
    /// High-risk phrases found; takes precedence over low-risk matches.
    High,
}

/// Rough automation timeline derived by the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    /// Automation signals in the present tense.
    #[serde(rename = "Already happening")]
    AlreadyHappening,
    /// Default when no timeline phrases match.
    #[serde(rename = "Next 5-10 years")]
    Next5to10Years,
    /// Decade-scale signals.
    #[serde(rename = "Next 10 years")]
    Next10Years,
    /// Long-term signals.
    #[serde(rename = "Next 10-20 years")]
    Next10to20Years,
}

/// Compact structured summary over the enriched, ranked corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Coarse risk classification.
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    /// Up to five fixed factor labels, one per matched keyword category.
    #[serde(rename = "keyFactors")]
    pub key_factors: Vec<String>,
    /// Rough automation timeline.
    pub timeline: Timeline,
}

impl Default for RiskSummary {
    fn default() -> Self {
        Self {
            risk_level: RiskLevel::Medium,
            key_factors: Vec::new(),
            timeline: Timeline::Next5to10Years,
        }
    }
}

/// The aggregation facade's output: one report per call, nothing persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationReport {
    /// The job title that was analysed, echoed back.
    pub job: String,
    /// Deduplicated, ranked, enriched results, capped at
    /// [`ResearchConfig::max_results`](crate::ResearchConfig::max_results).
    pub results: Vec<SearchResult>,
    /// Keyword-heuristic risk summary.
    pub summary: RiskSummary,
    /// `true` when this is the curated-fallback report served after a
    /// facade-level failure. A distinct success path, not an error.
    #[serde(default)]
    pub fallback: bool,
}
