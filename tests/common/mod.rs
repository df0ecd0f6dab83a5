//! Shared helpers for the git-backed integration tests.
//!
//! `TestRepo` builds throwaway repositories (optionally with a bare
//! `origin` or linked worktrees); `skip_if_no_git!` turns a test into a
//! no-op on machines without a `git` binary.
//!
//! Integration test files are separate crates and use different subsets
//! of these helpers, hence the module-level allows.

#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_macros)]

pub mod test_repo;

pub use test_repo::TestRepo;

use std::process::Command;

/// Whether a usable `git` binary is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Return early from a test when git is not installed
macro_rules! skip_if_no_git {
    () => {
        if !common::git_available() {
            eprintln!("skipping: git is not installed");
            return;
        }
    };
}
