//! Configurable entry point tying the parser, compiler and reducer together.

use crate::compile::{self, Compilation};
use crate::error::Result;
use crate::types::{EditOperation, OffsetUnit, TextSegment};
use crate::{clean, markup};
use std::io::Read;

/// Read markup text from a reader. Input must be valid UTF-8.
pub fn read_markup<R: Read>(mut reader: R) -> Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(raw)
}

/// Converts markup into segments, edit operations, or plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupProcessor {
    /// Index at which the flattened text is inserted.
    insertion_index: usize,

    /// Unit used for every emitted offset.
    offset_unit: OffsetUnit,
}

impl MarkupProcessor {
    /// Create a processor inserting at index 0 and counting code points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index carried on the insert operation.
    pub fn with_insertion_index(mut self, index: usize) -> Self {
        self.insertion_index = index;
        self
    }

    /// Set how offsets are counted.
    pub fn with_offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.offset_unit = unit;
        self
    }

    pub fn offset_unit(&self) -> OffsetUnit {
        self.offset_unit
    }

    pub fn insertion_index(&self) -> usize {
        self.insertion_index
    }

    /// Parse raw markup into segments.
    pub fn parse_markup(&self, raw: &str) -> Vec<TextSegment> {
        markup::parse(raw)
    }

    /// Flatten segments and collect style ranges.
    pub fn compile(&self, segments: &[TextSegment]) -> Compilation {
        compile::compile(segments, self.offset_unit)
    }

    /// Compile segments into edit operations addressed to `target_object_id`.
    pub fn to_edit_operations(
        &self,
        segments: &[TextSegment],
        target_object_id: &str,
    ) -> Vec<EditOperation> {
        self.compile(segments)
            .into_operations(target_object_id, self.insertion_index)
    }

    /// Parse and compile in one step.
    pub fn render(&self, raw: &str, target_object_id: &str) -> Vec<EditOperation> {
        let segments = self.parse_markup(raw);
        self.to_edit_operations(&segments, target_object_id)
    }

    /// Strip all markup from `raw`.
    pub fn clean_text(&self, raw: &str) -> String {
        clean::clean(raw)
    }
}
