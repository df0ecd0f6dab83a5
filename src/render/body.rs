//! Body rendering (message + notes)

use super::LINE_ENDING;
use super::html::escape_html;

/// Render the commit body
///
/// Message lines are followed by the notes block, every line HTML escaped.
/// Leading and trailing blank lines are dropped and the result is wrapped in
/// two newlines on each side.
pub fn generate_body(message: &str, notes: Option<&str>) -> String {
    let mut lines: Vec<&str> = message
        .split('\n')
        .chain(notes.into_iter().flat_map(|notes| notes.split('\n')))
        .skip_while(|line| line.trim().is_empty())
        .collect();

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let text = lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join(LINE_ENDING);

    format!("\n\n{}\n\n", text)
}
