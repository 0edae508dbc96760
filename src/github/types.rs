// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use serde::{Deserialize, Serialize};

/// GitHub user or organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub owner: Owner,
    pub stargazers_count: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// One entry from the contributors listing.
///
/// Anonymous contributors can lack most profile fields, hence the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    pub contributions: u64,
}

/// One page of the contributors listing, plus whether a further page exists.
#[derive(Debug, Clone)]
pub struct ContributorPage {
    pub contributors: Vec<Contributor>,
    pub has_next: bool,
}

/// Rate limit information from GitHub API response headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
