//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and output markers.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const BRANCH: &str = "branch";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given path (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Never spawn a pager (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Limit `git log` to a single commit
    pub const SINGLE: &str = "-1";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Load notes from the default notes ref (used by `%N`)
    pub const NOTES: &str = "--notes";
    /// List remote-tracking branches only
    pub const REMOTES: &str = "-r";
    /// List both local and remote-tracking branches
    pub const ALL: &str = "-a";
    /// Only list branches which contain the given commit
    pub const CONTAINS: &str = "--contains";
    /// Separates revisions from paths
    pub const END_OF_OPTIONS: &str = "--";
}

/// Markers found in git output
pub mod markers {
    /// Prefix of the current branch in `git branch` output
    pub const CURRENT_BRANCH: &str = "* ";
    /// Prefix of the other branches in `git branch` output
    pub const OTHER_BRANCH: &str = "  ";
    /// Prefix of a branch checked out in a linked worktree
    pub const WORKTREE_BRANCH: &str = "+ ";
    /// Separator of symbolic ref aliases (`origin/HEAD -> origin/main`)
    pub const ALIAS: &str = " -> ";
    /// Detached HEAD pseudo-branch (`(HEAD detached at 1234abc)`)
    pub const DETACHED_HEAD: &str = "(";
    /// Notes marker emitted for the default notes ref
    pub const NOTES: &str = "Notes:";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
