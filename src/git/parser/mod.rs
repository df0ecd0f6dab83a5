//! git output parser
//!
//! Parses the output from git commands into structured data.

mod branch;
mod commit;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for the line opening a commit's notes block
/// Format: `Notes:` (default ref) or `Notes (<ref label>):`
/// Example: `Notes (p4notes):`
static NOTES_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Notes( \(.*\))?:$").expect("Invalid notes marker regex"));

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Whether a raw line opens the notes block
    pub fn is_notes_marker(line: &str) -> bool {
        NOTES_MARKER_REGEX.is_match(line)
    }
}
