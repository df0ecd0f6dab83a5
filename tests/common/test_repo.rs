//! Scratch git repositories with pinned identities and dates.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository, removed on drop together with any bare
/// origin or worktree directories it created.
pub struct TestRepo {
    dir: TempDir,
    companions: Vec<TempDir>,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    ///
    /// The repository has a local identity configured and `main` as its
    /// unborn branch, independent of the machine's git configuration.
    pub fn new() -> Self {
        let repo = Self {
            dir: scratch_dir(),
            companions: Vec::new(),
        };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Create a repository whose `origin` is a fresh bare repository.
    pub fn with_bare_origin() -> Self {
        let mut repo = Self::new();
        let origin = scratch_dir();
        run_git(origin.path(), &["init", "--bare", "-q"], &[]);

        let url = origin.path().to_string_lossy().into_owned();
        repo.git(&["remote", "add", "origin", &url]);
        repo.companions.push(origin);
        repo
    }

    /// Check out an existing branch in a new linked worktree.
    ///
    /// Returns the worktree path.
    pub fn add_worktree(&mut self, branch: &str) -> PathBuf {
        let parent = scratch_dir();
        let path = parent.path().join(branch.replace('/', "-"));
        let target = path.to_string_lossy().into_owned();

        self.git(&["worktree", "add", "-q", &target, branch]);
        self.companions.push(parent);
        path
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        self.git_with_env(args, &[])
    }

    /// Execute a git command with extra environment variables.
    pub fn git_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> String {
        run_git(self.dir.path(), args, envs)
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Commit all changes with a fixed author/committer and dates.
    ///
    /// `author` is "Name <email>"; dates are Unix epoch seconds (UTC).
    /// Returns the full commit hash.
    pub fn commit_as(
        &self,
        message: &str,
        author: &str,
        author_time: i64,
        committer: (&str, &str),
        commit_time: i64,
    ) -> String {
        let author_date = format!("@{} +0000", author_time);
        let commit_date = format!("@{} +0000", commit_time);

        self.git(&["add", "-A"]);
        self.git_with_env(
            &[
                "commit",
                "-q",
                "--allow-empty",
                "--author",
                author,
                "-m",
                message,
            ],
            &[
                ("GIT_AUTHOR_DATE", author_date.as_str()),
                ("GIT_COMMITTER_NAME", committer.0),
                ("GIT_COMMITTER_EMAIL", committer.1),
                ("GIT_COMMITTER_DATE", commit_date.as_str()),
            ],
        );
        self.head()
    }

    /// Commit all changes as the configured test user.
    pub fn commit(&self, message: &str) -> String {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "--allow-empty", "-m", message]);
        self.head()
    }

    /// Full hash of HEAD.
    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }
}

fn scratch_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Run git in `dir`, panicking with its stderr on failure.
fn run_git(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> String {
    let output = Command::new("git")
        .args(args)
        .envs(envs.iter().copied())
        .current_dir(dir)
        .output()
        .expect("Failed to execute git command");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {:?} failed with exit code {:?}:\n{}",
            args,
            output.status.code(),
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}
