//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::constants::{self, commands, errors, flags, markers};
use super::parser::Parser;
use super::template::{HEADER_LINE_COUNT, NOTES_SEPARATOR, Templates};
use super::{CommitSource, GitError};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
    /// git binary to invoke
    program: PathBuf,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self {
            repo_path: None,
            program: PathBuf::from(constants::GIT_COMMAND),
        }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
            ..Self::new()
        }
    }

    /// Use a different git binary
    pub fn with_program(mut self, program: PathBuf) -> Self {
        self.program = program;
        self
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically adds `--no-pager` so commands never block on a terminal.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(&self.program);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_PAGER);
        cmd.args(args);

        debug!(program = %self.program.display(), ?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git log -1` for a revision and return its raw, unassembled output
    pub fn show_raw(&self, hash: &str) -> Result<String, GitError> {
        let revision = revision_arg(hash)?;
        self.run(&[
            commands::LOG,
            flags::SINGLE,
            flags::NO_COLOR,
            flags::NOTES,
            Templates::commit_data(),
            revision,
            flags::END_OF_OPTIONS,
        ])
    }

    /// Run `git branch --contains` for a revision
    pub fn branch_contains_raw(
        &self,
        hash: &str,
        include_local: bool,
        include_remote: bool,
    ) -> Result<Option<String>, GitError> {
        let scope = match (include_local, include_remote) {
            (true, true) => Some(flags::ALL),
            (false, true) => Some(flags::REMOTES),
            (true, false) => None,
            (false, false) => return Ok(None),
        };

        let revision = revision_arg(hash)?;
        let mut args = vec![commands::BRANCH, flags::NO_COLOR];
        args.extend(scope);
        args.push(flags::CONTAINS);
        args.push(revision);

        self.run(&args).map(Some)
    }
}

impl CommitSource for GitExecutor {
    fn commit_data(&self, hash: &str) -> Result<Option<String>, GitError> {
        let output = self.show_raw(hash)?;
        Ok(assemble_commit_block(&output))
    }

    fn branches_containing(
        &self,
        hash: &str,
        include_local: bool,
        include_remote: bool,
    ) -> Result<Vec<String>, GitError> {
        Ok(self
            .branch_contains_raw(hash, include_local, include_remote)?
            .map(|output| Parser::parse_branch_contains(&output))
            .unwrap_or_default())
    }
}

/// Reject revisions that git would parse as an option
fn revision_arg(hash: &str) -> Result<&str, GitError> {
    if hash.starts_with('-') {
        return Err(GitError::MalformedInput(format!(
            "revision must not start with '-': {}",
            hash
        )));
    }
    Ok(hash)
}

/// Rewrite `Templates::commit_data` output into the raw commit block
///
/// Message lines and note lines are indented with a tab; notes are introduced
/// by the default notes marker after an empty line.
fn assemble_commit_block(output: &str) -> Option<String> {
    if output.trim().is_empty() {
        return None;
    }

    let (commit, notes) = output.split_once(NOTES_SEPARATOR).unwrap_or((output, ""));

    let mut lines = commit.split('\n');
    let mut block: Vec<String> = lines
        .by_ref()
        .take(HEADER_LINE_COUNT)
        .map(str::to_string)
        .collect();

    let message: Vec<&str> = lines.collect();
    let message = message.join("\n");
    for line in message.trim_end_matches('\n').split('\n') {
        block.push(format!("\t{}", line));
    }

    let notes = notes.trim_end_matches('\n');
    if !notes.is_empty() {
        block.push(String::new());
        block.push(markers::NOTES.to_string());
        for line in notes.split('\n') {
            block.push(format!("\t{}", line));
        }
    }

    Some(block.join("\n"))
}
