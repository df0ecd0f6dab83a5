//! Commit lookup against a [`CommitSource`]
//!
//! Lookup failures are user-visible results, never errors.

use tracing::warn;

use crate::git::CommitSource;
use crate::model::{CommitData, CommitInformation};
use crate::render;

/// Resolve and render a commit
///
/// When the source fails, has no data for `hash`, or returns text that does
/// not parse, the header reads `Cannot find commit <hash>`.
pub fn get_commit_info<S: CommitSource + ?Sized>(source: &S, hash: &str) -> CommitInformation {
    let raw = match source.commit_data(hash) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CommitInformation::not_found(hash),
        Err(e) => {
            warn!(hash, error = %e, "commit lookup failed");
            return CommitInformation::not_found(hash);
        }
    };

    match CommitData::parse(&raw).and_then(|data| render::render(&data)) {
        Ok(info) => info,
        Err(e) => {
            warn!(hash, error = %e, "commit data could not be rendered");
            CommitInformation::not_found(hash)
        }
    }
}

/// List branches containing `hash`
///
/// Returns an empty list when neither scope is requested or the source fails.
pub fn get_all_branches_which_contain_given_commit<S: CommitSource + ?Sized>(
    source: &S,
    hash: &str,
    include_local: bool,
    include_remote: bool,
) -> Vec<String> {
    if !include_local && !include_remote {
        return Vec::new();
    }

    source
        .branches_containing(hash, include_local, include_remote)
        .unwrap_or_else(|e| {
            warn!(hash, error = %e, "branch lookup failed");
            Vec::new()
        })
}
