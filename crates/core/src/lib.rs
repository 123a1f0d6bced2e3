//! Markup-to-rich-text formatting engine for slide text.
//!
//! Model output uses a small inline markup: `**bold**`, `• ` bullets and
//! `  ◦ ` sub-bullets. This crate parses that markup into segments, compiles
//! the segments into positional edit operations for a rich-text document,
//! and reduces markup to plain text where formatting cannot be rendered.

pub mod clean;
pub mod compile;
pub mod error;
pub mod markup;
pub mod processor;
pub mod types;

pub use compile::Compilation;
pub use error::{Error, Result};
pub use processor::{read_markup, MarkupProcessor};
pub use types::{
    BulletLevel, BulletPreset, BulletRange, EditOperation, OffsetUnit, TextRange, TextSegment,
};

/// Parse raw markup into an ordered list of segments.
pub fn parse_markup(raw: &str) -> Vec<TextSegment> {
    markup::parse(raw)
}

/// Compile segments into edit operations addressed to `target_object_id`,
/// with offsets counted in code points and text inserted at index 0.
pub fn to_edit_operations(segments: &[TextSegment], target_object_id: &str) -> Vec<EditOperation> {
    MarkupProcessor::new().to_edit_operations(segments, target_object_id)
}

/// Remove all markup from `raw`.
pub fn clean_text(raw: &str) -> String {
    clean::clean(raw)
}
