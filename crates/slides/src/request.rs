//! Serde model of the Slides API requests produced from edit operations.

use serde::{Deserialize, Serialize};
use slidemark_core::{BulletPreset, EditOperation, Error, Result, TextRange};

/// A single `presentations.batchUpdate` request.
///
/// Serializes as an object with one key naming the request kind, e.g.
/// `{"insertText": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlidesRequest {
    InsertText(InsertTextRequest),
    UpdateTextStyle(UpdateTextStyleRequest),
    CreateParagraphBullets(CreateParagraphBulletsRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTextRequest {
    pub object_id: String,
    pub insertion_index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub object_id: String,
    pub style: TextStyle,
    pub text_range: Range,
    /// Field mask naming the style properties being set.
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBulletsRequest {
    pub object_id: String,
    pub text_range: Range,
    pub bullet_preset: BulletPreset,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

/// Kind of text range. Only fixed ranges are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeType {
    FixedRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(rename = "type")]
    pub range_type: RangeType,
    pub start_index: usize,
    pub end_index: usize,
}

impl From<TextRange> for Range {
    fn from(range: TextRange) -> Self {
        Self {
            range_type: RangeType::FixedRange,
            start_index: range.start,
            end_index: range.end,
        }
    }
}

impl SlidesRequest {
    /// Translate one edit operation.
    ///
    /// Fails when the operation's object id is blank, since the API cannot
    /// address an unnamed text container.
    pub fn from_operation(op: &EditOperation) -> Result<Self> {
        let object_id = op.object_id();
        if object_id.trim().is_empty() {
            return Err(Error::InvalidObjectId(object_id.to_string()));
        }

        let request = match op {
            EditOperation::InsertText {
                object_id,
                insertion_index,
                text,
            } => Self::InsertText(InsertTextRequest {
                object_id: object_id.clone(),
                insertion_index: *insertion_index,
                text: text.clone(),
            }),
            EditOperation::ApplyBoldStyle { object_id, range } => {
                Self::UpdateTextStyle(UpdateTextStyleRequest {
                    object_id: object_id.clone(),
                    style: TextStyle { bold: Some(true) },
                    text_range: (*range).into(),
                    fields: "bold".to_string(),
                })
            }
            EditOperation::ApplyBulletPreset {
                object_id,
                range,
                preset,
                ..
            } => Self::CreateParagraphBullets(CreateParagraphBulletsRequest {
                object_id: object_id.clone(),
                text_range: (*range).into(),
                bullet_preset: *preset,
            }),
        };

        Ok(request)
    }

    /// The object id this request targets.
    pub fn object_id(&self) -> &str {
        match self {
            Self::InsertText(r) => &r.object_id,
            Self::UpdateTextStyle(r) => &r.object_id,
            Self::CreateParagraphBullets(r) => &r.object_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use slidemark_core::BulletLevel;

    #[test]
    fn test_insert_text_shape() {
        let op = EditOperation::InsertText {
            object_id: "body".to_string(),
            insertion_index: 0,
            text: "Hello".to_string(),
        };
        let value = serde_json::to_value(SlidesRequest::from_operation(&op).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({"insertText": {"objectId": "body", "insertionIndex": 0, "text": "Hello"}})
        );
    }

    #[test]
    fn test_bold_shape() {
        let op = EditOperation::ApplyBoldStyle {
            object_id: "body".to_string(),
            range: TextRange::new(0, 9),
        };
        let value = serde_json::to_value(SlidesRequest::from_operation(&op).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "updateTextStyle": {
                    "objectId": "body",
                    "style": {"bold": true},
                    "textRange": {"type": "FIXED_RANGE", "startIndex": 0, "endIndex": 9},
                    "fields": "bold"
                }
            })
        );
    }

    #[test]
    fn test_bullet_shape() {
        let op = EditOperation::ApplyBulletPreset {
            object_id: "body".to_string(),
            range: TextRange::new(4, 12),
            level: BulletLevel::Sub,
            preset: BulletPreset::HollowCircleSquare,
        };
        let value = serde_json::to_value(SlidesRequest::from_operation(&op).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "createParagraphBullets": {
                    "objectId": "body",
                    "textRange": {"type": "FIXED_RANGE", "startIndex": 4, "endIndex": 12},
                    "bulletPreset": "BULLET_HOLLOW_CIRCLE_SQUARE"
                }
            })
        );
    }

    #[test]
    fn test_blank_object_id_rejected() {
        let op = EditOperation::InsertText {
            object_id: "  ".to_string(),
            insertion_index: 0,
            text: String::new(),
        };

        assert!(matches!(
            SlidesRequest::from_operation(&op),
            Err(Error::InvalidObjectId(id)) if id == "  "
        ));
    }
}
