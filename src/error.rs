// Error types for the contribs crate.
// Covers GitHub API errors, cache store errors, and decode failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContribsError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cache store error: {0}")]
    Cache(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ContribsError>;
