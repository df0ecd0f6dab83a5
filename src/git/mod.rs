//! git command execution layer
//!
//! This module handles running git commands and parsing their output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

/// Errors that can occur when parsing commit data or executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("No commit data was supplied")]
    NullInput,

    #[error("Malformed commit data: {0}")]
    MalformedInput(String),

    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// Source of raw commit metadata and branch membership.
///
/// The parser and renderer only depend on this seam; [`GitExecutor`] is the
/// process-backed implementation.
pub trait CommitSource {
    /// Raw metadata block for `hash`, or `None` when the source has nothing for it
    fn commit_data(&self, hash: &str) -> Result<Option<String>, GitError>;

    /// Names of branches whose history contains `hash`
    fn branches_containing(
        &self,
        hash: &str,
        include_local: bool,
        include_remote: bool,
    ) -> Result<Vec<String>, GitError>;
}
