//! Parser for `git branch --contains` output

use super::super::constants::markers;
use super::Parser;

impl Parser {
    /// Parse `git branch [-a|-r] --contains <hash>` output into branch names
    ///
    /// Output examples:
    /// - `* main` (current branch)
    /// - `  feature/x`
    /// - `+ hotfix` (checked out in a linked worktree)
    /// - `  remotes/origin/HEAD -> origin/main` (symbolic alias, keeps the alias)
    /// - `* (HEAD detached at 1234abc)` (skipped)
    pub fn parse_branch_contains(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| {
                let name = line
                    .strip_prefix(markers::CURRENT_BRANCH)
                    .or_else(|| line.strip_prefix(markers::WORKTREE_BRANCH))
                    .or_else(|| line.strip_prefix(markers::OTHER_BRANCH))
                    .unwrap_or(line)
                    .trim();

                if name.is_empty() || name.starts_with(markers::DETACHED_HEAD) {
                    return None;
                }

                let name = name
                    .split_once(markers::ALIAS)
                    .map_or(name, |(alias, _)| alias);
                Some(name.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_branch_contains() {
        let output = "* main\n  feature/login\n";
        let branches = Parser::parse_branch_contains(output);
        assert_eq!(branches, vec!["main", "feature/login"]);
    }

    #[test]
    fn test_parse_worktree_branch() {
        let output = "+ feature\n* main\n  release\n";
        let branches = Parser::parse_branch_contains(output);
        assert_eq!(branches, vec!["feature", "main", "release"]);
    }

    #[test]
    fn test_parse_remote_alias() {
        let output = "  remotes/origin/HEAD -> origin/main\n  remotes/origin/main\n";
        let branches = Parser::parse_branch_contains(output);
        assert_eq!(branches, vec!["remotes/origin/HEAD", "remotes/origin/main"]);
    }

    #[test]
    fn test_parse_skips_detached_head() {
        let output = "* (HEAD detached at 1234abc)\n  main\n";
        let branches = Parser::parse_branch_contains(output);
        assert_eq!(branches, vec!["main"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(Parser::parse_branch_contains("").is_empty());
        assert!(Parser::parse_branch_contains("\n  \n").is_empty());
    }
}
