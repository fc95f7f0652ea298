//! # riskscout
//!
//! Federated research aggregation for job automation-risk reports.
//!
//! Given a job title, riskscout fans a set of research queries out to
//! several independent search sources concurrently, merges what comes
//! back, and produces a ranked, enriched, summarised report. It is a
//! library — the HTTP route, prompt construction, and presentation all
//! live with the caller.
//!
//! ## Design
//!
//! - One adapter per source (DuckDuckGo, Bing, Brave Search, Semantic
//!   Scholar), each isolating its provider's failures
//! - Settle-all fan-out: every query runs concurrently, partial provider
//!   failure degrades the result count instead of aborting, and an
//!   aggregation-level deadline bounds total latency
//! - First-seen-wins deduplication by canonical URL
//! - Additive heuristic ranking (job-title match, automation and research
//!   keywords, scholarly/government/policy authority, recency)
//! - Top results enriched with excerpts extracted from the pages themselves
//! - Keyword-heuristic risk level, key factors, and timeline summary
//!
//! All state is per-call and transient; nothing is cached or shared
//! between aggregations.
//!
//! ## Security
//!
//! - The only secret is the optional Brave API token, which never
//!   appears in errors or logs
//! - No network listeners — this is a library, not a server
//! - Queries are logged only at trace level

pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod pipeline;
pub mod source;
pub mod sources;
pub mod types;

pub use config::ResearchConfig;
pub use error::{ResearchError, Result};
pub use pipeline::fallback_report;
pub use source::{QuerySpec, SourceAdapter};
pub use types::{
    AggregationReport, RiskLevel, RiskSummary, SearchResult, SearchSource, Timeline,
};

/// Analyze the automation risk for a job title.
///
/// Fans queries out to all sources in `config`, deduplicates and ranks
/// the merged results, enriches the top results with extracted page
/// content, and derives a risk summary. Provider failures degrade the
/// report instead of failing it: if every source fails, the report is
/// valid but empty, with an all-defaults summary.
///
/// # Errors
///
/// Returns [`ResearchError::Config`] for an invalid configuration and
/// [`ResearchError::InvalidJob`] for an empty job title — both rejected
/// before any network traffic. A catastrophic pipeline failure is
/// converted into the curated [`fallback_report`], not an error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> riskscout::Result<()> {
/// let config = riskscout::ResearchConfig::default();
/// let report = riskscout::analyze("Truck Driver", &config).await?;
/// println!("{:?}: {} results", report.summary.risk_level, report.results.len());
/// # Ok(())
/// # }
/// ```
pub async fn analyze(job: &str, config: &ResearchConfig) -> Result<AggregationReport> {
    pipeline::aggregate(job, config).await
}

/// [`analyze`] with the default configuration.
///
/// # Errors
///
/// Same as [`analyze`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> riskscout::Result<()> {
/// let report = riskscout::analyze_default("Paralegal").await?;
/// for result in &report.results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn analyze_default(job: &str) -> Result<AggregationReport> {
    analyze(job, &ResearchConfig::default()).await
}
