//! Trait definition for pluggable search source adapters, plus the
//! per-call query expansion.
//!
//! Each source (DuckDuckGo, Bing, Brave, Scholar) implements
//! [`SourceAdapter`] to translate its provider protocol into the common
//! [`SearchResult`] shape.

use crate::config::{ResearchConfig, JOB_PLACEHOLDER};
use crate::error::ResearchError;
use crate::types::{SearchResult, SearchSource};

/// A pluggable search source adapter.
///
/// Implementors query one external provider and normalise its response
/// into structured [`SearchResult`] values. Each adapter handles its own:
///
/// - request construction with query encoding and required headers/auth
/// - response parsing (HTML via CSS selectors, or JSON)
/// - discarding entries lacking a usable title+URL pair
///
/// Adapters may return errors; the fan-out coordinator absorbs them so a
/// failing provider contributes nothing instead of aborting the
/// aggregation. All implementations must be `Send + Sync` for concurrent
/// queries.
pub trait SourceAdapter: Send + Sync {
    /// Query this source and return parsed results.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError`] if the HTTP request fails, the response
    /// cannot be parsed, or the provider is rate-limiting requests. Callers
    /// above the coordinator never see these errors.
    fn search(
        &self,
        query: &str,
        config: &ResearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, ResearchError>> + Send;

    /// Which [`SearchSource`] variant this adapter represents.
    fn source(&self) -> SearchSource;
}

/// One (interpolated query × target source) pair. Stateless; a fresh set
/// is expanded for every aggregation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// The query string with the job title already interpolated.
    pub query: String,
    /// The source this query is sent to.
    pub source: SearchSource,
}

impl QuerySpec {
    /// Expand the cross product of `config.query_templates` and
    /// `config.sources` for the given job title.
    pub fn expand(job: &str, config: &ResearchConfig) -> Vec<QuerySpec> {
        let mut specs = Vec::with_capacity(config.query_templates.len() * config.sources.len());
        for template in &config.query_templates {
            let query = template.replace(JOB_PLACEHOLDER, job);
            for source in &config.sources {
                specs.push(QuerySpec {
                    query: query.clone(),
                    source: *source,
                });
            }
        }
        specs
    }
}
