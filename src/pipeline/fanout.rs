//! Settle-all fan-out across search sources.
//!
//! Issues every (query × source) pair concurrently and waits for all of
//! them to settle — success or failure — rather than racing. Failed or
//! timed-out calls contribute nothing; the aggregation never aborts
//! because some subset of providers failed. An aggregation-level
//! deadline bounds total latency: when it fires, stragglers are
//! abandoned and already-settled results are kept.

use std::future::Future;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::ResearchConfig;
use crate::error::ResearchError;
use crate::source::{QuerySpec, SourceAdapter};
use crate::sources::{BingAdapter, BraveAdapter, DuckDuckGoAdapter, ScholarAdapter};
use crate::types::{SearchResult, SearchSource};

/// Fan a batch of query specs out to their sources concurrently and
/// collect the union of all successful contributions.
///
/// Each call gets its own per-source timeout; outcomes are classified
/// independently. Output order follows settle order and carries no
/// guarantee — callers dedupe and rank afterwards.
pub async fn fan_out(specs: Vec<QuerySpec>, config: &ResearchConfig) -> Vec<SearchResult> {
    fan_out_with(specs, config, query_source).await
}

/// [`fan_out`] with an injectable per-spec query function, so tests can
/// substitute fake providers for the real network adapters.
pub(crate) async fn fan_out_with<F, Fut>(
    specs: Vec<QuerySpec>,
    config: &ResearchConfig,
    query_fn: F,
) -> Vec<SearchResult>
where
    F: Fn(QuerySpec, ResearchConfig) -> Fut,
    Fut: Future<Output = Result<Vec<SearchResult>, ResearchError>>,
{
    let per_call = Duration::from_secs(config.source_timeout_seconds);

    let mut calls: FuturesUnordered<_> = specs
        .into_iter()
        .map(|spec| {
            let source = spec.source;
            let call = query_fn(spec, config.clone());
            async move {
                let outcome = tokio::time::timeout(per_call, call).await;
                (source, outcome)
            }
        })
        .collect();

    let deadline = tokio::time::sleep(Duration::from_secs(config.overall_deadline_seconds));
    tokio::pin!(deadline);

    let mut collected: Vec<SearchResult> = Vec::new();

    loop {
        tokio::select! {
            settled = calls.next() => match settled {
                Some((source, Ok(Ok(results)))) => {
                    tracing::debug!(%source, count = results.len(), "source returned results");
                    collected.extend(results);
                }
                Some((source, Ok(Err(err)))) => {
                    tracing::warn!(%source, error = %err, "source query failed");
                }
                Some((source, Err(_))) => {
                    tracing::warn!(%source, "source query timed out");
                }
                // Every call has settled.
                None => break,
            },
            () = &mut deadline => {
                tracing::warn!(
                    pending = calls.len(),
                    "aggregation deadline reached, abandoning remaining source queries"
                );
                break;
            }
        }
    }

    collected
}

/// Dispatch one query to the concrete adapter for its source.
async fn query_source(
    spec: QuerySpec,
    config: ResearchConfig,
) -> Result<Vec<SearchResult>, ResearchError> {
    match spec.source {
        SearchSource::DuckDuckGo => DuckDuckGoAdapter.search(&spec.query, &config).await,
        SearchSource::Bing => BingAdapter.search(&spec.query, &config).await,
        SearchSource::Brave => BraveAdapter.search(&spec.query, &config).await,
        SearchSource::Scholar => ScholarAdapter.search(&spec.query, &config).await,
    }
}
