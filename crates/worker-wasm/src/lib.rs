//! WASM-compatible wrapper for slide markup compilation.
//!
//! This crate exposes the markup engine to JavaScript
//! for use in Cloudflare Workers.

use serde::{Deserialize, Serialize};
use slidemark_core::{EditOperation, MarkupProcessor, OffsetUnit};
use slidemark_slides::BatchUpdateRequest;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Options accepted from JavaScript. Every field is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Count offsets in UTF-16 code units, as JavaScript strings do.
    pub utf16: bool,
    /// Index at which the text is inserted.
    pub insertion_index: usize,
}

impl RenderOptions {
    fn processor(&self) -> MarkupProcessor {
        let unit = if self.utf16 {
            OffsetUnit::Utf16
        } else {
            OffsetUnit::CodePoints
        };
        MarkupProcessor::new()
            .with_offset_unit(unit)
            .with_insertion_index(self.insertion_index)
    }
}

fn options_from_js(options: JsValue) -> Result<RenderOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(RenderOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse markup into an array of segments.
#[wasm_bindgen]
pub fn parse_markup(raw: &str) -> Result<JsValue, JsValue> {
    to_js(&slidemark_core::parse_markup(raw))
}

/// Compile markup into edit operations for `object_id`.
///
/// # Arguments
/// * `raw` - Markup text
/// * `object_id` - Id of the text container to edit
/// * `options` - Optional `{ utf16, insertionIndex }`
#[wasm_bindgen]
pub fn to_edit_operations(raw: &str, object_id: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    to_js(&edit_operations_impl(raw, object_id, &options))
}

/// Build a Google Slides `batchUpdate` body for `object_id`.
///
/// Throws if `object_id` is blank.
#[wasm_bindgen]
pub fn to_slides_requests(raw: &str, object_id: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let batch = slides_requests_impl(raw, object_id, &options).map_err(|e| JsValue::from_str(&e))?;
    to_js(&batch)
}

/// Strip all markup.
#[wasm_bindgen]
pub fn clean_text(raw: &str) -> String {
    slidemark_core::clean_text(raw)
}

fn edit_operations_impl(raw: &str, object_id: &str, options: &RenderOptions) -> Vec<EditOperation> {
    options.processor().render(raw, object_id)
}

fn slides_requests_impl(
    raw: &str,
    object_id: &str,
    options: &RenderOptions,
) -> Result<BatchUpdateRequest, String> {
    slidemark_slides::render_markup_with(&options.processor(), raw, object_id)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_operations_with_options() {
        let options = RenderOptions {
            utf16: true,
            insertion_index: 2,
        };
        let ops = edit_operations_impl("👍 **ok**", "box", &options);

        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[0],
            EditOperation::InsertText {
                object_id: "box".to_string(),
                insertion_index: 2,
                text: "👍 ok".to_string(),
            }
        );
        assert_eq!(ops[1].range().map(|r| (r.start, r.end)), Some((3, 5)));
    }

    #[test]
    fn test_slides_requests_blank_id() {
        let err = slides_requests_impl("text", "", &RenderOptions::default()).unwrap_err();
        assert!(err.contains("Invalid target object id"));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  ◦ **x** y"), "x y");
    }
}
