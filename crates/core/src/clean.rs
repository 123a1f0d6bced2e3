//! Plain-text reduction of markup.

use crate::markup::{classify_line, BOLD_SPAN_REGEX};

/// Remove all markup, keeping line breaks and every other character.
///
/// Bold delimiters are stripped across the whole string first, then the
/// bullet prefix of each resulting line.
pub fn clean(raw: &str) -> String {
    let unbolded = BOLD_SPAN_REGEX.replace_all(raw, "$1");

    unbolded
        .split('\n')
        .map(|line| classify_line(line).1)
        .collect::<Vec<_>>()
        .join("\n")
}
