// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use async_trait::async_trait;

use crate::error::Result;

use super::client::{GitHubClient, has_next_page};
use super::types::{Contributor, ContributorPage, Repository};

/// The two upstream operations the fetch orchestrator depends on.
///
/// `GitHubClient` is the production implementation; tests substitute a
/// scripted host with call counters.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetch a single repository's metadata.
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository>;

    /// Fetch one page of a repository's contributor listing.
    async fn list_contributors(
        &self,
        owner: &str,
        name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ContributorPage>;
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let response = self.get(&format!("/repos/{}/{}", owner, name)).await?;
        let repository: Repository = response.json().await?;
        Ok(repository)
    }

    async fn list_contributors(
        &self,
        owner: &str,
        name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ContributorPage> {
        let params = [
            ("page", &page.to_string()),
            ("per_page", &per_page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/repos/{}/{}/contributors", owner, name), &params)
            .await?;
        let has_next = has_next_page(&response);
        let contributors: Vec<Contributor> = response.json().await?;
        Ok(ContributorPage {
            contributors,
            has_next,
        })
    }
}
