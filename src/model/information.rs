//! Rendered commit information (header + body)

use super::CommitData;
use crate::git::GitError;
use crate::render;

/// Display strings for one commit, ready for an HTML-capable text surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitInformation {
    /// Five-line author/committer/hash summary
    pub header: String,

    /// Escaped message and notes
    pub body: String,
}

impl CommitInformation {
    /// Render commit information from parsed data
    ///
    /// Fails with [`GitError::NullInput`] when no data is supplied, which is
    /// distinct from a lookup that found nothing (see [`Self::not_found`]).
    pub fn from_data(data: Option<&CommitData>) -> Result<Self, GitError> {
        data.ok_or(GitError::NullInput).and_then(render::render)
    }

    /// Placeholder shown when a commit cannot be resolved
    pub fn not_found(hash: &str) -> Self {
        Self {
            header: format!("Cannot find commit {}", hash),
            body: String::new(),
        }
    }
}
