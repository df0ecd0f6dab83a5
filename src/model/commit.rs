//! Commit metadata model

use chrono::{DateTime, Utc};

use super::identity::split_identity;
use crate::git::GitError;
use crate::git::parser::Parser;

/// Metadata of a single git commit, parsed from a raw commit block
///
/// Immutable after construction; timestamps stay in UTC until rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitData {
    /// Full commit hash
    pub guid: String,

    /// Tree hash
    pub tree_guid: String,

    /// Parent commit hashes, in order (empty for root commits)
    pub parent_guids: Vec<String>,

    /// Author "Name <email>" line
    pub author: String,

    /// Author timestamp
    pub author_date: DateTime<Utc>,

    /// Committer "Name <email>" line
    pub committer: String,

    /// Commit timestamp
    pub commit_date: DateTime<Utc>,

    /// Message lines, leading tab removed
    pub body: String,

    /// Notes block including its `Notes (...):` marker line
    pub notes: Option<String>,
}

impl CommitData {
    /// Parse a raw commit block
    pub fn parse(raw: &str) -> Result<Self, GitError> {
        Parser::parse_commit_data(raw)
    }

    /// Author display name
    pub fn author_name(&self) -> &str {
        split_identity(&self.author).map_or(self.author.as_str(), |(name, _)| name)
    }

    /// Author email
    pub fn author_email(&self) -> &str {
        split_identity(&self.author).map_or("", |(_, email)| email)
    }

    /// Committer display name
    pub fn committer_name(&self) -> &str {
        split_identity(&self.committer).map_or(self.committer.as_str(), |(name, _)| name)
    }

    /// Committer email
    pub fn committer_email(&self) -> &str {
        split_identity(&self.committer).map_or("", |(_, email)| email)
    }

    /// First non-blank message line
    pub fn subject(&self) -> &str {
        self.body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    /// Does this commit have more than one parent?
    pub fn is_merge(&self) -> bool {
        self.parent_guids.len() > 1
    }

    /// Is this a root commit (no parents)?
    pub fn is_root(&self) -> bool {
        self.parent_guids.is_empty()
    }
}
