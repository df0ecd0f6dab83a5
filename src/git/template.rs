//! git pretty-format templates for stable output parsing
//!
//! These templates ensure consistent, parseable output from git commands
//! regardless of user configuration.

/// Separator between the message and the notes in `commit_data` output (NUL)
pub const NOTES_SEPARATOR: char = '\0';

/// Number of lines preceding the message in a raw commit block
pub const HEADER_LINE_COUNT: usize = 8;

/// Templates for git commands
pub struct Templates;

impl Templates {
    /// Template for `git log -1` producing one raw commit block
    ///
    /// Lines (separated by newline):
    /// 1. commit hash
    /// 2. tree hash
    /// 3. parent hashes (space-separated, empty for root commits)
    /// 4. author "Name <email>" (mailmap applied)
    /// 5. author timestamp (Unix epoch seconds)
    /// 6. committer "Name <email>" (mailmap applied)
    /// 7. committer timestamp (Unix epoch seconds)
    /// 8. empty separator line
    /// 9. raw message body
    ///
    /// Notes:
    /// - `%x00` separates the message from `%N`, so note text can never be
    ///   mistaken for message text. The executor rewrites both halves into the
    ///   tab-indented block the parser consumes.
    pub fn commit_data() -> &'static str {
        concat!(
            "--format=",
            "%H%n",
            "%T%n",
            "%P%n",
            "%aN <%aE>%n",
            "%at%n",
            "%cN <%cE>%n",
            "%ct%n",
            "%n",
            "%B",
            "%x00",
            "%N"
        )
    }
}
