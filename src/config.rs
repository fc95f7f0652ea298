//! Aggregation configuration with sensible defaults.
//!
//! [`ResearchConfig`] enumerates the active search sources, the query
//! templates fanned out per source, result caps, and all timeouts. It is an
//! explicit structure passed into the pipeline at call time — no module-level
//! state — so provider sets are swappable in tests via fakes.

use crate::error::ResearchError;
use crate::types::SearchSource;

/// Placeholder interpolated with the job title in query templates.
pub const JOB_PLACEHOLDER: &str = "{job}";

/// Configuration for one research aggregation call.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// Which sources to query. Every (template × source) pair is issued
    /// concurrently; results are merged.
    pub sources: Vec<SearchSource>,
    /// Query templates containing a `{job}` placeholder.
    pub query_templates: Vec<String>,
    /// Maximum number of results in the final report.
    pub max_results: usize,
    /// Maximum results a single adapter call contributes.
    pub per_source_results: usize,
    /// How many top-ranked results are enriched with extracted page content.
    pub enrich_top: usize,
    /// Per-source HTTP request timeout in seconds.
    pub source_timeout_seconds: u64,
    /// Per-page content extraction timeout in seconds.
    pub extract_timeout_seconds: u64,
    /// Aggregation-level deadline in seconds for the whole fan-out batch.
    /// Stragglers are abandoned when it expires; settled results are kept.
    pub overall_deadline_seconds: u64,
    /// Maximum characters extracted from a fetched page.
    pub excerpt_max_chars: usize,
    /// Display cap for enriched snippets.
    pub snippet_display_chars: usize,
    /// Whether to request safe-search filtering from sources that support it.
    pub safe_search: bool,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Brave Search API subscription token. If `None`, the Brave adapter
    /// fails soft and contributes nothing.
    pub brave_api_key: Option<String>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            sources: SearchSource::all().to_vec(),
            query_templates: default_query_templates(),
            max_results: 20,
            per_source_results: 10,
            enrich_top: 5,
            source_timeout_seconds: 5,
            extract_timeout_seconds: 5,
            overall_deadline_seconds: 10,
            excerpt_max_chars: 2000,
            snippet_display_chars: 500,
            safe_search: true,
            user_agent: None,
            brave_api_key: None,
        }
    }
}

/// The query angles fanned out for a job title: automation probability,
/// replacement timeline, job security research, risk percentages, and the
/// augmentation-vs-replacement framing.
fn default_query_templates() -> Vec<String> {
    [
        "\"{job}\" \"artificial intelligence\" automation probability",
        "AI replace \"{job}\" timeline research",
        "\"{job}\" job security artificial intelligence study",
        "future of \"{job}\" automation risk percentage",
        "\"{job}\" skills AI cannot replace",
        "\"{job}\" augmentation vs replacement AI",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

impl ResearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results`, `per_source_results`, and `snippet_display_chars`
    ///   must be greater than 0
    /// - `sources` and `query_templates` must not be empty
    /// - all timeouts must be greater than 0
    /// - `overall_deadline_seconds` must be >= `source_timeout_seconds`,
    ///   otherwise no source could ever settle before the deadline
    pub fn validate(&self) -> Result<(), ResearchError> {
        if self.max_results == 0 {
            return Err(ResearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.per_source_results == 0 {
            return Err(ResearchError::Config(
                "per_source_results must be greater than 0".into(),
            ));
        }
        if self.snippet_display_chars == 0 {
            return Err(ResearchError::Config(
                "snippet_display_chars must be greater than 0".into(),
            ));
        }
        if self.sources.is_empty() {
            return Err(ResearchError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        if self.query_templates.is_empty() {
            return Err(ResearchError::Config(
                "at least one query template is required".into(),
            ));
        }
        if self.source_timeout_seconds == 0 || self.extract_timeout_seconds == 0 {
            return Err(ResearchError::Config(
                "timeouts must be greater than 0".into(),
            ));
        }
        if self.overall_deadline_seconds < self.source_timeout_seconds {
            return Err(ResearchError::Config(
                "overall_deadline_seconds must be >= source_timeout_seconds".into(),
            ));
        }
        Ok(())
    }
}
