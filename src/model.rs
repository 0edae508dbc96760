// Domain model for contributor aggregates.
// These are the shapes that get cached and returned to callers, decoupled
// from the GitHub API response structs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a repository by owner and name, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` string.
    pub fn parse(s: &str) -> Option<Self> {
        let (owner, name) = s.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One contributor, in upstream order (by contributions, descending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRecord {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u64,
}

/// The merged repository-metadata-plus-contributors record.
///
/// Constructed only by the fetch orchestrator; owner and name reflect what
/// upstream reports (which may differ in case from the caller's input).
/// Contributor order is preserved exactly as returned by upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryAggregate {
    pub owner: String,
    pub name: String,
    pub stargazers_count: u64,
    pub contributors: Vec<ContributorRecord>,
}

impl RepositoryAggregate {
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(&self.owner, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_ref() {
        let r = RepoRef::parse("acme/widget").unwrap();
        assert_eq!(r.owner, "acme");
        assert_eq!(r.name, "widget");
        assert_eq!(r.to_string(), "acme/widget");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(RepoRef::parse("acme").is_none());
        assert!(RepoRef::parse("/widget").is_none());
        assert!(RepoRef::parse("acme/").is_none());
        assert!(RepoRef::parse("acme/widget/extra").is_none());
    }
}
