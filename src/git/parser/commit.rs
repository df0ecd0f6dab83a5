//! Raw commit block parser (`git log -1` with the commit data template)

use chrono::{DateTime, Utc};

use super::super::GitError;
use super::Parser;
use crate::model::{CommitData, split_identity};

/// Lines that must be present before the message
const REQUIRED_LINES: usize = 7;

/// Index of the first message line
const MESSAGE_START: usize = 8;

impl Parser {
    /// Parse a raw commit block into [`CommitData`]
    ///
    /// Format:
    /// ```text
    /// <commit hash>
    /// <tree hash>
    /// <parent hash> <parent hash>
    /// John Doe <john@example.com>
    /// 1706612400
    /// Jane Doe <jane@example.com>
    /// 1706698800
    ///
    ///     Message subject
    ///
    /// Notes (review):
    ///     Reviewed-by: someone
    /// ```
    /// Message lines carry one leading tab (shown as spaces above). Notes are
    /// kept verbatim, marker line included.
    pub fn parse_commit_data(raw: &str) -> Result<CommitData, GitError> {
        if raw.trim().is_empty() {
            return Err(GitError::MalformedInput("empty commit data".to_string()));
        }

        let lines: Vec<&str> = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        if lines.len() < REQUIRED_LINES {
            return Err(GitError::MalformedInput(format!(
                "Expected at least {} lines, got {}",
                REQUIRED_LINES,
                lines.len()
            )));
        }

        let guid = lines[0].trim();
        if guid.is_empty() {
            return Err(GitError::MalformedInput("missing commit hash".to_string()));
        }

        let author = Self::parse_identity_line(lines[3])?;
        let author_date = Self::parse_unix_time(lines[4])?;
        let committer = Self::parse_identity_line(lines[5])?;
        let commit_date = Self::parse_unix_time(lines[6])?;

        let (body, notes) = Self::split_message(lines.get(MESSAGE_START..).unwrap_or_default());

        Ok(CommitData {
            guid: guid.to_string(),
            tree_guid: lines[1].trim().to_string(),
            parent_guids: lines[2].split_whitespace().map(str::to_string).collect(),
            author,
            author_date,
            committer,
            commit_date,
            body,
            notes,
        })
    }

    /// Validate a "Name <email>" line, returning it trimmed
    fn parse_identity_line(line: &str) -> Result<String, GitError> {
        let line = line.trim();
        match split_identity(line) {
            Some(_) => Ok(line.to_string()),
            None => Err(GitError::MalformedInput(format!(
                "Expected \"Name <email>\", got: {:?}",
                line
            ))),
        }
    }

    /// Parse Unix epoch seconds into a UTC timestamp
    pub(super) fn parse_unix_time(line: &str) -> Result<DateTime<Utc>, GitError> {
        let line = line.trim();
        line.parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| GitError::MalformedInput(format!("Invalid Unix timestamp: {:?}", line)))
    }

    /// Split message lines from the trailing notes block
    ///
    /// Message lines lose their single leading tab. Everything from the notes
    /// marker on is returned verbatim.
    pub(super) fn split_message(lines: &[&str]) -> (String, Option<String>) {
        let notes_start = lines
            .iter()
            .position(|line| Self::is_notes_marker(line))
            .unwrap_or(lines.len());

        let body = lines[..notes_start]
            .iter()
            .map(|line| line.strip_prefix('\t').unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");

        let notes = (notes_start < lines.len()).then(|| lines[notes_start..].join("\n"));

        (body, notes)
    }
}
