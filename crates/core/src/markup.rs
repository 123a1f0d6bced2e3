//! Markup parsing.
//!
//! The markup language is line oriented. A line may start with a bullet
//! prefix (`• ` or `  ◦ `), and any line may contain `**bold**` spans.
//! Bold spans never nest and never cross a line break.

use crate::types::{BulletLevel, TextSegment};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix of a top-level bullet line.
pub(crate) const BULLET_PREFIX: &str = "• ";

/// Prefix of a sub-bullet line.
pub(crate) const SUB_BULLET_PREFIX: &str = "  ◦ ";

/// Non-greedy bold span. `.` excludes `\n`, so spans stay within a line.
pub(crate) static BOLD_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Split a line into its bullet classification and remaining content.
pub(crate) fn classify_line(line: &str) -> (Option<BulletLevel>, &str) {
    if let Some(content) = line.strip_prefix(SUB_BULLET_PREFIX) {
        (Some(BulletLevel::Sub), content)
    } else if let Some(content) = line.strip_prefix(BULLET_PREFIX) {
        (Some(BulletLevel::Main), content)
    } else {
        (None, line)
    }
}

/// Parse raw markup into an ordered list of segments.
///
/// Lines are separated by `"\n"` segments; there is no separator after the
/// last line. Never fails: text that does not form valid markup is kept as
/// plain text.
pub fn parse(raw: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();

    for (idx, line) in raw.split('\n').enumerate() {
        if idx > 0 {
            segments.push(TextSegment::newline());
        }

        let (bullet, content) = classify_line(line);
        parse_bold_spans(content, bullet, &mut segments);
    }

    log::trace!("Parsed {} segments from {} bytes", segments.len(), raw.len());
    segments
}

/// Split one line's content on bold spans, tagging every piece with the
/// line's bullet context.
fn parse_bold_spans(content: &str, bullet: Option<BulletLevel>, out: &mut Vec<TextSegment>) {
    let mut last_end = 0;

    for caps in BOLD_SPAN_REGEX.captures_iter(content) {
        let (Some(span), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if span.start() > last_end {
            out.push(segment(&content[last_end..span.start()], false, bullet));
        }
        out.push(segment(inner.as_str(), true, bullet));

        last_end = span.end();
    }

    if last_end < content.len() {
        out.push(segment(&content[last_end..], false, bullet));
    }
}

fn segment(text: &str, is_bold: bool, bullet: Option<BulletLevel>) -> TextSegment {
    TextSegment {
        text: text.to_string(),
        is_bold,
        is_bullet: bullet.is_some(),
        level: bullet.unwrap_or_default(),
    }
}
