//! Fetches a GitHub repository's metadata and full contributor list
//! concurrently, merges them into one aggregate record, and serves it through
//! a pluggable read-through cache (in-memory or S3).

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod model;
pub mod service;

pub use config::Config;
pub use error::{ContribsError, Result};
pub use model::{ContributorRecord, RepoRef, RepositoryAggregate};
pub use service::Services;
