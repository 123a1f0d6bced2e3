//! Segment compilation and edit-operation emission.
//!
//! Segments are folded into one flattened string while recording the ranges
//! that need bold styling and the runs that need paragraph bullets. The
//! result is then projected into an ordered list of edit operations.

use crate::types::{BulletLevel, BulletRange, EditOperation, OffsetUnit, TextRange, TextSegment};
use serde::{Deserialize, Serialize};

/// Flattened text together with the ranges to style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compilation {
    /// Concatenation of every segment's text.
    pub text: String,

    /// One range per bold segment, left to right.
    pub bold_ranges: Vec<TextRange>,

    /// One range per bullet run, left to right.
    pub bullet_ranges: Vec<BulletRange>,
}

impl Compilation {
    /// Emit the insert operation followed by bold and bullet operations.
    pub fn into_operations(self, object_id: &str, insertion_index: usize) -> Vec<EditOperation> {
        let mut ops = Vec::with_capacity(1 + self.bold_ranges.len() + self.bullet_ranges.len());

        ops.push(EditOperation::InsertText {
            object_id: object_id.to_string(),
            insertion_index,
            text: self.text,
        });

        ops.extend(self.bold_ranges.into_iter().map(|range| EditOperation::ApplyBoldStyle {
            object_id: object_id.to_string(),
            range,
        }));

        ops.extend(self.bullet_ranges.into_iter().map(|bullet| {
            EditOperation::ApplyBulletPreset {
                object_id: object_id.to_string(),
                range: bullet.range,
                level: bullet.level,
                preset: bullet.level.preset(),
            }
        }));

        ops
    }
}

/// Running state of the fold.
#[derive(Debug, Default)]
struct CompileState {
    cursor: usize,
    text: String,
    /// Start offset and level of the bullet run being accumulated.
    open_run: Option<(usize, BulletLevel)>,
    bold_ranges: Vec<TextRange>,
    bullet_ranges: Vec<BulletRange>,
}

impl CompileState {
    fn step(mut self, segment: &TextSegment, unit: OffsetUnit) -> Self {
        let start = self.cursor;
        let end = start + unit.measure(&segment.text);

        if segment.is_bold {
            self.bold_ranges.push(TextRange::new(start, end));
        }

        match (segment.is_bullet, self.open_run) {
            (true, None) => self.open_run = Some((start, segment.level)),
            (false, Some(_)) => self.close_run(start),
            _ => {}
        }

        self.text.push_str(&segment.text);
        self.cursor = end;
        self
    }

    fn close_run(&mut self, end: usize) {
        if let Some((start, level)) = self.open_run.take() {
            self.bullet_ranges.push(BulletRange {
                range: TextRange::new(start, end),
                level,
            });
        }
    }

    fn finish(mut self) -> Compilation {
        let end = self.cursor;
        self.close_run(end);

        Compilation {
            text: self.text,
            bold_ranges: self.bold_ranges,
            bullet_ranges: self.bullet_ranges,
        }
    }
}

/// Fold segments into flattened text and style ranges.
pub fn compile(segments: &[TextSegment], unit: OffsetUnit) -> Compilation {
    let compilation = segments
        .iter()
        .fold(CompileState::default(), |state, segment| state.step(segment, unit))
        .finish();

    log::debug!(
        "Compiled {} segments: {} bold ranges, {} bullet ranges",
        segments.len(),
        compilation.bold_ranges.len(),
        compilation.bullet_ranges.len()
    );

    compilation
}
