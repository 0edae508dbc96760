// Contributor cache layer.
// Read-through/write-through composition of the cache store and the fetch
// orchestrator.

use tracing::{debug, warn};

use crate::cache::Cache;
use crate::error::Result;
use crate::model::{RepoRef, RepositoryAggregate};

use super::fetch::FetchService;

/// Serves contributor aggregates, consulting the cache before upstream.
#[derive(Clone)]
pub struct ContributorsService {
    fetch: FetchService,
    cache: Cache,
}

impl ContributorsService {
    pub fn new(fetch: FetchService, cache: Cache) -> Self {
        Self { fetch, cache }
    }

    /// Return the aggregate for a repository, from cache when possible.
    ///
    /// On a miss the result of exactly one orchestrated fetch is written back
    /// best-effort; a write-back failure is logged, never surfaced, since the
    /// caller already holds a valid result. A fetch failure propagates
    /// unchanged and writes nothing.
    pub async fn get_aggregate(&self, repo: &RepoRef) -> Result<RepositoryAggregate> {
        let key = aggregate_key(repo);

        if let Some(hit) = self.cache.get_json::<RepositoryAggregate>(&key).await? {
            debug!(repo = %repo, %key, "aggregate cache hit");
            return Ok(hit);
        }

        debug!(repo = %repo, %key, "aggregate cache miss");
        let aggregate = self.fetch.fetch_aggregate(repo).await?;

        if let Err(err) = self.cache.save_json(&key, &aggregate).await {
            warn!(repo = %repo, %key, error = %err, "cache write-back failed");
        }

        Ok(aggregate)
    }
}

/// Deterministic cache key for a repository's aggregate.
pub fn aggregate_key(repo: &RepoRef) -> String {
    format!("contributors/{}--{}.json", repo.owner, repo.name)
}
