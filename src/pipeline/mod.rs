//! The aggregation pipeline and its facade.
//!
//! Stages run strictly in sequence — fan-out, dedup, rank, enrich,
//! summarize — each consuming the previous stage's complete output.
//! There is no partial or streaming output: the facade returns one
//! report, or one facade-level error for unusable input. Provider
//! failures never surface here; they are absorbed inside the fan-out
//! and extraction layers.

pub mod canonical;
pub mod dedup;
pub mod enrich;
pub mod fanout;
pub mod rank;
pub mod summarize;

use std::fmt;
use std::future::Future;

use crate::config::ResearchConfig;
use crate::error::{ResearchError, Result};
use crate::source::QuerySpec;
use crate::types::{AggregationReport, RiskSummary, SearchResult};

/// Pipeline stages, in execution order. `Failed` is reachable only from
/// a facade-level error, never from individual provider failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No aggregation in flight.
    Idle,
    /// Fan-out queries issued, awaiting settle-all.
    Searching,
    /// Merging by canonical URL.
    Deduplicating,
    /// Scoring and sorting.
    Ranking,
    /// Fetching page content for the top results.
    Enriching,
    /// Deriving the risk summary.
    Summarizing,
    /// Report produced.
    Done,
    /// Facade-level failure (invalid input or pipeline panic).
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Searching => "searching",
            Self::Deduplicating => "deduplicating",
            Self::Ranking => "ranking",
            Self::Enriching => "enriching",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

fn transition(stage: Stage) {
    tracing::debug!(%stage, "pipeline stage");
}

/// Run one research aggregation for a job title.
///
/// Validates the configuration and the job title before any fan-out is
/// attempted, then runs the pipeline on an isolated task. A panic
/// anywhere in the pipeline — e.g. a mapping crash on malformed
/// provider data — is caught here and converted into the curated
/// fallback report rather than an unhandled failure; the aggregation
/// always answers with something.
///
/// # Errors
///
/// Returns [`ResearchError::Config`] for an invalid configuration and
/// [`ResearchError::InvalidJob`] for an empty or blank job title. All
/// other failure modes degrade rather than error.
pub async fn aggregate(job: &str, config: &ResearchConfig) -> Result<AggregationReport> {
    aggregate_with(job, config, run_pipeline).await
}

/// [`aggregate`] with an injectable pipeline, so tests can drive the
/// crash-containment path without a real fan-out.
async fn aggregate_with<F, Fut>(
    job: &str,
    config: &ResearchConfig,
    pipeline_fn: F,
) -> Result<AggregationReport>
where
    F: FnOnce(String, ResearchConfig) -> Fut,
    Fut: Future<Output = AggregationReport> + Send + 'static,
{
    if let Err(err) = config.validate() {
        transition(Stage::Failed);
        return Err(err);
    }

    let job = job.trim();
    if job.is_empty() {
        transition(Stage::Failed);
        return Err(ResearchError::InvalidJob("job title is empty".into()));
    }

    let task = tokio::spawn(pipeline_fn(job.to_owned(), config.clone()));
    match task.await {
        Ok(report) => Ok(report),
        Err(err) => {
            transition(Stage::Failed);
            tracing::error!(error = %err, "pipeline crashed, serving curated fallback report");
            Ok(fallback_report(job))
        }
    }
}

/// The pipeline proper. Infallible by construction: every failure mode
/// below the facade degrades to fewer results.
async fn run_pipeline(job: String, config: ResearchConfig) -> AggregationReport {
    transition(Stage::Searching);
    let specs = QuerySpec::expand(&job, &config);
    tracing::debug!(queries = specs.len(), job = %job, "fanning out");
    let raw = fanout::fan_out(specs, &config).await;

    transition(Stage::Deduplicating);
    let unique = dedup::deduplicate(raw);

    transition(Stage::Ranking);
    let mut ranked = rank::rank(unique, &job);
    ranked.truncate(config.max_results);

    transition(Stage::Enriching);
    let enriched = enrich::enrich(ranked, &config).await;

    transition(Stage::Summarizing);
    let summary = summarize::summarize(&enriched);

    transition(Stage::Done);
    tracing::debug!(results = enriched.len(), "aggregation complete");

    AggregationReport {
        job,
        results: enriched,
        summary,
        fallback: false,
    }
}

/// The curated fallback report served when the pipeline itself fails.
///
/// Fixed, well-known starting points for automation-risk research.
/// Callers treat this as a distinct non-error success path, not a
/// retryable failure.
pub fn fallback_report(job: &str) -> AggregationReport {
    let results = vec![
        SearchResult {
            title: "Oxford Study on Job Automation".into(),
            url: "https://www.oxfordmartin.ox.ac.uk/publications/the-future-of-employment/".into(),
            snippet: "Comprehensive research on automation probability for various occupations"
                .into(),
            source: String::new(),
            relevance: None,
        },
        SearchResult {
            title: "MIT Work of the Future Report".into(),
            url: "https://workofthefuture.mit.edu/".into(),
            snippet: "In-depth analysis of AI impact on employment".into(),
            source: String::new(),
            relevance: None,
        },
    ];

    AggregationReport {
        job: job.to_owned(),
        results,
        summary: RiskSummary::default(),
        fallback: true,
    }
}
