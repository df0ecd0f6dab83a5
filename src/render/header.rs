//! Header rendering (author, dates, committer, hash)

use super::LINE_ENDING;
use super::html::escape_html;
use super::time::format_commit_date;
use crate::git::GitError;
use crate::model::CommitIdentity;

/// Render the five-line commit header
///
/// ```text
/// Author:\t\t<a href='mailto:EMAIL'>NAME &lt;EMAIL&gt;</a>
/// Author date:\tAGE (Www Mmm dd HH:MM:SS yyyy)
/// Committer:\t<a href='mailto:EMAIL'>NAME &lt;EMAIL&gt;</a>
/// Commit date:\tAGE (Www Mmm dd HH:MM:SS yyyy)
/// Commit hash:\tHASH
/// ```
/// Dates are shown in the local time zone. Lines are joined with the platform
/// line terminator, without a trailing one.
pub fn generate_header(
    author: &CommitIdentity<'_>,
    committer: &CommitIdentity<'_>,
    commit_guid: &str,
) -> Result<String, GitError> {
    let lines = [
        format!("Author:\t\t{}", mailto_link(author)?),
        format!("Author date:\t{}", date_text(author)),
        format!("Committer:\t{}", mailto_link(committer)?),
        format!("Commit date:\t{}", date_text(committer)),
        format!("Commit hash:\t{}", commit_guid),
    ];
    Ok(lines.join(LINE_ENDING))
}

/// `<a href='mailto:EMAIL'>NAME &lt;EMAIL&gt;</a>`, name and email escaped
fn mailto_link(identity: &CommitIdentity<'_>) -> Result<String, GitError> {
    let email = identity.email().ok_or_else(|| {
        GitError::MalformedInput(format!(
            "Expected \"Name <email>\", got: {:?}",
            identity.raw_line
        ))
    })?;
    let email = escape_html(email);
    Ok(format!(
        "<a href='mailto:{email}'>{name} &lt;{email}&gt;</a>",
        email = email,
        name = escape_html(identity.name)
    ))
}

fn date_text(identity: &CommitIdentity<'_>) -> String {
    format!("{} ({})", identity.age, format_commit_date(identity.time))
}
