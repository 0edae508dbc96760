// Fetch orchestrator.
// Fans out the metadata fetch and the paginated contributor listing
// concurrently, then joins with deterministic error precedence.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::github::{Contributor, RepositoryHost};
use crate::model::{ContributorRecord, RepoRef, RepositoryAggregate};

/// Page size for the contributor listing, matching the upstream maximum.
const CONTRIBUTORS_PER_PAGE: u32 = 100;

/// Merges a repository's metadata and full contributor list into one
/// aggregate record.
#[derive(Clone)]
pub struct FetchService {
    host: Arc<dyn RepositoryHost>,
}

impl FetchService {
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self { host }
    }

    /// Fetch metadata and contributors concurrently and merge.
    ///
    /// Both branches run to completion before the join returns. If both fail,
    /// the metadata error is surfaced; the check order is fixed in this code
    /// path rather than left to completion order.
    pub async fn fetch_aggregate(&self, repo: &RepoRef) -> Result<RepositoryAggregate> {
        let (repository, contributors) = tokio::join!(
            self.host.get_repository(&repo.owner, &repo.name),
            self.fetch_all_contributors(repo),
        );

        let repository = repository?;
        let contributors = contributors?;

        debug!(
            repo = %repo,
            stargazers = repository.stargazers_count,
            contributors = contributors.len(),
            "fetched aggregate from upstream"
        );

        // Owner and name come from the metadata result, not the caller's
        // input, in case upstream normalized their case.
        Ok(RepositoryAggregate {
            owner: repository.owner.login,
            name: repository.name,
            stargazers_count: repository.stargazers_count,
            contributors: contributors.into_iter().map(to_record).collect(),
        })
    }

    /// Walk every page of the contributor listing, in upstream order.
    ///
    /// All-or-nothing: a failure on any page aborts with that page's error and
    /// discards entries accumulated so far.
    async fn fetch_all_contributors(&self, repo: &RepoRef) -> Result<Vec<Contributor>> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            let batch = self
                .host
                .list_contributors(&repo.owner, &repo.name, page, CONTRIBUTORS_PER_PAGE)
                .await?;

            all.extend(batch.contributors);
            if !batch.has_next {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}

fn to_record(c: Contributor) -> ContributorRecord {
    ContributorRecord {
        id: c.id,
        login: c.login,
        avatar_url: c.avatar_url,
        html_url: c.html_url,
        contributions: c.contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContribsError;
    use crate::service::testing::MockHost;

    fn acme_widget() -> RepoRef {
        RepoRef::new("acme", "widget")
    }

    #[tokio::test]
    async fn test_merges_metadata_and_paginated_contributors() {
        let host = Arc::new(
            MockHost::new()
                .with_repository("acme", "widget", 42)
                .with_contributor_pages(vec![
                    vec![MockHost::contributor(1, "alice", 10)],
                    vec![MockHost::contributor(2, "bob", 5)],
                ]),
        );
        let fetch = FetchService::new(host.clone());

        let aggregate = fetch.fetch_aggregate(&acme_widget()).await.unwrap();

        assert_eq!(aggregate.owner, "acme");
        assert_eq!(aggregate.name, "widget");
        assert_eq!(aggregate.stargazers_count, 42);
        assert_eq!(aggregate.contributors.len(), 2);
        assert_eq!(aggregate.contributors[0].login, "alice");
        assert_eq!(aggregate.contributors[0].contributions, 10);
        assert_eq!(aggregate.contributors[1].login, "bob");
        assert_eq!(aggregate.contributors[1].contributions, 5);

        // Two pages requested, one metadata call.
        assert_eq!(host.repository_calls(), 1);
        assert_eq!(host.contributor_calls(), 2);
    }

    #[tokio::test]
    async fn test_owner_and_name_come_from_upstream_metadata() {
        // Caller used different casing than upstream's canonical form.
        let host = Arc::new(
            MockHost::new()
                .with_repository("Acme", "Widget", 7)
                .with_contributor_pages(vec![vec![]]),
        );
        let fetch = FetchService::new(host);

        let aggregate = fetch
            .fetch_aggregate(&RepoRef::new("acme", "widget"))
            .await
            .unwrap();

        assert_eq!(aggregate.owner, "Acme");
        assert_eq!(aggregate.name, "Widget");
    }

    #[tokio::test]
    async fn test_metadata_error_takes_precedence_when_both_fail() {
        let host = Arc::new(
            MockHost::new()
                .with_repository_error(ContribsError::NotFound("repo".to_string()))
                .with_contributor_error_on_page(1, ContribsError::Unauthorized),
        );
        let fetch = FetchService::new(host);

        let err = fetch.fetch_aggregate(&acme_widget()).await.unwrap_err();
        assert!(matches!(err, ContribsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_contributor_error_surfaces_when_metadata_succeeds() {
        let host = Arc::new(
            MockHost::new()
                .with_repository("acme", "widget", 42)
                .with_contributor_error_on_page(1, ContribsError::Unauthorized),
        );
        let fetch = FetchService::new(host);

        let err = fetch.fetch_aggregate(&acme_widget()).await.unwrap_err();
        assert!(matches!(err, ContribsError::Unauthorized));
    }

    #[tokio::test]
    async fn test_pagination_failure_discards_earlier_pages() {
        let host = Arc::new(
            MockHost::new()
                .with_repository("acme", "widget", 42)
                .with_contributor_pages(vec![
                    vec![MockHost::contributor(1, "alice", 10)],
                    vec![MockHost::contributor(2, "bob", 5)],
                ])
                .with_contributor_error_on_page(
                    2,
                    ContribsError::Other("page 2 failed".to_string()),
                ),
        );
        let fetch = FetchService::new(host.clone());

        let err = fetch.fetch_aggregate(&acme_widget()).await.unwrap_err();
        assert!(matches!(err, ContribsError::Other(msg) if msg == "page 2 failed"));

        // Page 1 was fetched before the failure, but nothing leaks out.
        assert_eq!(host.contributor_calls(), 2);
    }

    #[tokio::test]
    async fn test_repository_with_no_contributors() {
        let host = Arc::new(
            MockHost::new()
                .with_repository("acme", "widget", 0)
                .with_contributor_pages(vec![vec![]]),
        );
        let fetch = FetchService::new(host);

        let aggregate = fetch.fetch_aggregate(&acme_widget()).await.unwrap();
        assert!(aggregate.contributors.is_empty());
    }
}
