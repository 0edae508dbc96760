// Runtime configuration, loaded from the environment.

use crate::error::{ContribsError, Result};

/// Configuration knobs for the service graph.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token for the GitHub API.
    pub github_token: String,
    /// Remote cache bucket; `None` selects the volatile in-memory backend.
    pub cache_bucket: Option<String>,
}

impl Config {
    /// Load from `GITHUB_TOKEN` (required) and `CACHE_BUCKET_NAME` (optional,
    /// empty means unset).
    pub fn from_env() -> Result<Self> {
        let github_token =
            std::env::var("GITHUB_TOKEN").map_err(|_| ContribsError::MissingToken)?;
        let cache_bucket = std::env::var("CACHE_BUCKET_NAME")
            .ok()
            .and_then(normalize_bucket);

        Ok(Self {
            github_token,
            cache_bucket,
        })
    }

    pub fn new(github_token: impl Into<String>, cache_bucket: Option<String>) -> Self {
        Self {
            github_token: github_token.into(),
            cache_bucket: cache_bucket.and_then(normalize_bucket),
        }
    }
}

fn normalize_bucket(name: String) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
