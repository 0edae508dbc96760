// Service layer: fetch orchestration, the contributor cache, and usage
// recording, wired together from configuration.

pub mod contributors;
pub mod fetch;
pub mod usage;

use std::sync::Arc;

use tracing::info;

use crate::cache::{Cache, S3Cache};
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;

pub use contributors::ContributorsService;
pub use fetch::FetchService;
pub use usage::UsageRecorder;

/// Fully wired service graph. All collaborators are constructor-injected;
/// nothing here relies on process-wide state.
pub struct Services {
    pub contributors: ContributorsService,
    pub usage: UsageRecorder,
}

impl Services {
    /// Wire the services from configuration.
    ///
    /// A configured bucket selects the S3 cache backend; otherwise the
    /// volatile in-memory backend is used so the process still starts.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = Arc::new(GitHubClient::new(&config.github_token)?);

        let cache = match &config.cache_bucket {
            Some(bucket) => {
                info!(%bucket, "using S3 cache backend");
                Cache::new(Arc::new(S3Cache::from_env(bucket.clone()).await))
            }
            None => {
                info!("no cache bucket configured, using in-memory cache");
                Cache::memory()
            }
        };

        Ok(Self {
            contributors: ContributorsService::new(FetchService::new(client), cache),
            usage: UsageRecorder::new(),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted upstream host for service tests.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::{ContribsError, Result};
    use crate::github::{Contributor, ContributorPage, Owner, Repository, RepositoryHost};

    /// In-memory `RepositoryHost` with call counters and failure injection.
    #[derive(Default)]
    pub struct MockHost {
        repository: Mutex<Option<Result<Repository>>>,
        pages: Mutex<Vec<Vec<Contributor>>>,
        page_error: Mutex<Option<(u32, ContribsError)>>,
        repository_calls: AtomicUsize,
        contributor_calls: AtomicUsize,
    }

    impl MockHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_repository(self, owner: &str, name: &str, stargazers: u64) -> Self {
            *self.repository.lock().unwrap() = Some(Ok(Repository {
                id: 1,
                name: name.to_string(),
                owner: Owner {
                    id: 1,
                    login: owner.to_string(),
                    avatar_url: None,
                },
                stargazers_count: stargazers,
                html_url: None,
            }));
            self
        }

        pub fn with_repository_error(self, err: ContribsError) -> Self {
            *self.repository.lock().unwrap() = Some(Err(err));
            self
        }

        /// Script the contributor listing as explicit pages.
        pub fn with_contributor_pages(self, pages: Vec<Vec<Contributor>>) -> Self {
            *self.pages.lock().unwrap() = pages;
            self
        }

        /// Fail the listing when the given page number is requested.
        pub fn with_contributor_error_on_page(self, page: u32, err: ContribsError) -> Self {
            *self.page_error.lock().unwrap() = Some((page, err));
            self
        }

        pub fn contributor(id: u64, login: &str, contributions: u64) -> Contributor {
            Contributor {
                id,
                login: login.to_string(),
                avatar_url: format!("https://avatars.example/{login}"),
                html_url: format!("https://github.example/{login}"),
                contributions,
            }
        }

        pub fn repository_calls(&self) -> usize {
            self.repository_calls.load(Ordering::SeqCst)
        }

        pub fn contributor_calls(&self) -> usize {
            self.contributor_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RepositoryHost for MockHost {
        async fn get_repository(&self, _owner: &str, _name: &str) -> Result<Repository> {
            self.repository_calls.fetch_add(1, Ordering::SeqCst);
            match self.repository.lock().unwrap().as_ref() {
                Some(Ok(repo)) => Ok(repo.clone()),
                Some(Err(err)) => Err(clone_error(err)),
                None => Err(ContribsError::Other("no repository scripted".to_string())),
            }
        }

        async fn list_contributors(
            &self,
            _owner: &str,
            _name: &str,
            page: u32,
            _per_page: u32,
        ) -> Result<ContributorPage> {
            self.contributor_calls.fetch_add(1, Ordering::SeqCst);

            if let Some((failing_page, err)) = self.page_error.lock().unwrap().as_ref() {
                if *failing_page == page {
                    return Err(clone_error(err));
                }
            }

            let pages = self.pages.lock().unwrap();
            let index = (page - 1) as usize;
            match pages.get(index) {
                Some(contributors) => Ok(ContributorPage {
                    contributors: contributors.clone(),
                    has_next: index + 1 < pages.len(),
                }),
                None => Err(ContribsError::Other(format!("no page {page} scripted"))),
            }
        }
    }

    // ContribsError is not Clone (reqwest/serde_json sources aren't), so the
    // mock re-creates the variants it scripts.
    fn clone_error(err: &ContribsError) -> ContribsError {
        match err {
            ContribsError::Unauthorized => ContribsError::Unauthorized,
            ContribsError::NotFound(s) => ContribsError::NotFound(s.clone()),
            ContribsError::RateLimited { reset_at } => ContribsError::RateLimited {
                reset_at: reset_at.clone(),
            },
            ContribsError::MissingToken => ContribsError::MissingToken,
            ContribsError::Cache(s) => ContribsError::Cache(s.clone()),
            other => ContribsError::Other(other.to_string()),
        }
    }
}
