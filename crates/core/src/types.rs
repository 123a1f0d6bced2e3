//! Domain types for parsed markup and the edit operations compiled from it.

use serde::{Deserialize, Serialize};

/// Indentation depth of a bulleted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BulletLevel {
    /// Top-level bullet (`• `).
    #[default]
    Main,
    /// One level of sub-bullet (`  ◦ `).
    Sub,
}

impl BulletLevel {
    /// Numeric depth: 0 for main bullets, 1 for sub-bullets.
    pub fn depth(self) -> u8 {
        match self {
            Self::Main => 0,
            Self::Sub => 1,
        }
    }

    /// The visual preset used when rendering a run at this level.
    pub fn preset(self) -> BulletPreset {
        match self {
            Self::Main => BulletPreset::DiscCircleSquare,
            Self::Sub => BulletPreset::HollowCircleSquare,
        }
    }
}

impl From<BulletLevel> for u8 {
    fn from(level: BulletLevel) -> Self {
        level.depth()
    }
}

impl TryFrom<u8> for BulletLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Main),
            1 => Ok(Self::Sub),
            other => Err(format!("unsupported bullet level {}", other)),
        }
    }
}

/// Paragraph bullet presets understood by the document writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletPreset {
    /// Filled disc at the first nesting level.
    #[serde(rename = "BULLET_DISC_CIRCLE_SQUARE")]
    DiscCircleSquare,
    /// Hollow circle, used for indented sub-bullets.
    #[serde(rename = "BULLET_HOLLOW_CIRCLE_SQUARE")]
    HollowCircleSquare,
}

impl BulletPreset {
    /// The preset name as the Slides API spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DiscCircleSquare => "BULLET_DISC_CIRCLE_SQUARE",
            Self::HollowCircleSquare => "BULLET_HOLLOW_CIRCLE_SQUARE",
        }
    }
}

/// A piece of text with its formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Literal text, with all markup already consumed.
    pub text: String,

    /// Whether the segment is rendered bold.
    pub is_bold: bool,

    /// Whether the segment belongs to a bulleted line.
    pub is_bullet: bool,

    /// Bullet depth. Only meaningful when `is_bullet` is set.
    pub level: BulletLevel,
}

impl TextSegment {
    /// Create a plain, non-bullet segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a bold, non-bullet segment.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bold: true,
            ..Self::default()
        }
    }

    /// The separator emitted between two source lines.
    pub fn newline() -> Self {
        Self::plain("\n")
    }

    /// Mark this segment as part of a bulleted line at the given level.
    pub fn in_bullet(mut self, level: BulletLevel) -> Self {
        self.is_bullet = true;
        self.level = level;
        self
    }
}

/// Half-open `[start, end)` offsets into the flattened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A contiguous run of bullet paragraphs sharing one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletRange {
    pub range: TextRange,
    /// Level of the first segment in the run.
    pub level: BulletLevel,
}

/// How offsets into the flattened text are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetUnit {
    /// Unicode scalar values.
    #[default]
    CodePoints,
    /// UTF-16 code units, the unit the Slides API indexes text in.
    Utf16,
}

impl OffsetUnit {
    /// Length of `text` in this unit.
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::CodePoints => text.chars().count(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }
}

/// An instruction for the external rich-text document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    /// Insert the whole flattened text. Always the first operation.
    InsertText {
        object_id: String,
        insertion_index: usize,
        text: String,
    },
    /// Render a range bold.
    ApplyBoldStyle { object_id: String, range: TextRange },
    /// Turn the paragraphs covering a range into a bulleted list.
    ApplyBulletPreset {
        object_id: String,
        range: TextRange,
        level: BulletLevel,
        preset: BulletPreset,
    },
}

impl EditOperation {
    /// The text container this operation edits.
    pub fn object_id(&self) -> &str {
        match self {
            Self::InsertText { object_id, .. }
            | Self::ApplyBoldStyle { object_id, .. }
            | Self::ApplyBulletPreset { object_id, .. } => object_id,
        }
    }

    /// The styled range, if this is a style operation.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Self::InsertText { .. } => None,
            Self::ApplyBoldStyle { range, .. } | Self::ApplyBulletPreset { range, .. } => {
                Some(*range)
            }
        }
    }
}
