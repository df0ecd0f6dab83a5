//! Header/body rendering
//!
//! Turns commit data (or individually supplied fields) into escaped display
//! strings. Record-based rendering delegates to the same header function as
//! field-based callers, so both paths produce identical output.

mod body;
mod header;
pub mod html;
pub mod time;

pub use body::generate_body;
pub use header::generate_header;

use chrono::{DateTime, Utc};

use crate::git::GitError;
use crate::model::{CommitData, CommitIdentity, CommitInformation};
use self::time::relative_age_since;

/// Platform line terminator used between rendered lines
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Render commit information, computing relative ages against the current time
pub fn render(data: &CommitData) -> Result<CommitInformation, GitError> {
    render_at(data, Utc::now())
}

/// Render commit information with relative ages computed against `now`
pub fn render_at(data: &CommitData, now: DateTime<Utc>) -> Result<CommitInformation, GitError> {
    let author_age = relative_age_since(data.author_date, now);
    let committer_age = relative_age_since(data.commit_date, now);

    let author = CommitIdentity {
        name: data.author_name(),
        raw_line: &data.author,
        age: &author_age,
        time: data.author_date,
    };
    let committer = CommitIdentity {
        name: data.committer_name(),
        raw_line: &data.committer,
        age: &committer_age,
        time: data.commit_date,
    };

    Ok(CommitInformation {
        header: generate_header(&author, &committer, &data.guid)?,
        body: generate_body(&data.body, data.notes.as_deref()),
    })
}
