//! Commit identity (author / committer) model

use chrono::{DateTime, Utc};

/// One side of a commit's attribution, as shown in a rendered header
///
/// Borrowed from the record (or from caller-supplied fields) for the duration
/// of a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitIdentity<'a> {
    /// Display name (e.g. "John Doe (Acme Inc)")
    pub name: &'a str,

    /// Unparsed "Name <email>" line, the email is taken from here
    pub raw_line: &'a str,

    /// Relative age text (e.g. "3 days ago")
    pub age: &'a str,

    /// Absolute time in UTC
    pub time: DateTime<Utc>,
}

impl CommitIdentity<'_> {
    /// Email extracted from the raw line
    pub fn email(&self) -> Option<&str> {
        split_identity(self.raw_line).map(|(_, email)| email)
    }
}

/// Split a "Name <email>" line into `(name, email)`
///
/// Anchors on the rightmost `<...>` pair so names containing angle brackets or
/// other punctuation are kept intact. Returns `None` when no pair is present.
pub fn split_identity(raw: &str) -> Option<(&str, &str)> {
    let close = raw.rfind('>')?;
    let open = raw[..close].rfind('<')?;
    Some((raw[..open].trim(), &raw[open + 1..close]))
}
