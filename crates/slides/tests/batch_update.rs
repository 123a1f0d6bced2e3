//! Request bodies for complete markup documents.

use pretty_assertions::assert_eq;
use serde_json::json;
use slidemark_core::{MarkupProcessor, OffsetUnit};
use slidemark_slides::{render_markup, render_markup_with, BatchUpdateRequest};

#[test]
fn test_bullet_with_bold_body() {
    let batch = render_markup("• **Key point** with details", "auto_body_0").unwrap();
    let value: serde_json::Value = serde_json::from_str(&batch.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "requests": [
                {"insertText": {
                    "objectId": "auto_body_0",
                    "insertionIndex": 0,
                    "text": "Key point with details"
                }},
                {"updateTextStyle": {
                    "objectId": "auto_body_0",
                    "style": {"bold": true},
                    "textRange": {"type": "FIXED_RANGE", "startIndex": 0, "endIndex": 9},
                    "fields": "bold"
                }},
                {"createParagraphBullets": {
                    "objectId": "auto_body_0",
                    "textRange": {"type": "FIXED_RANGE", "startIndex": 0, "endIndex": 22},
                    "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE"
                }}
            ]
        })
    );
}

#[test]
fn test_utf16_offsets_in_body() {
    let processor = MarkupProcessor::new().with_offset_unit(OffsetUnit::Utf16);
    let batch = render_markup_with(&processor, "🚀 **Launch**", "title").unwrap();
    let value = serde_json::to_value(&batch).unwrap();

    assert_eq!(
        value["requests"][1]["updateTextStyle"]["textRange"],
        json!({"type": "FIXED_RANGE", "startIndex": 3, "endIndex": 9})
    );
}

#[test]
fn test_round_trip_through_json() {
    let batch = render_markup("**A**\n  ◦ b", "body").unwrap();
    let decoded: BatchUpdateRequest = serde_json::from_str(&batch.to_json_pretty().unwrap()).unwrap();

    assert_eq!(decoded, batch);
}
