//! Property-based tests for the markup engine.
//!
//! The engine must accept any string and always produce well-formed
//! operations whose ranges point inside the inserted text.

use proptest::prelude::*;
use slidemark_core::{parse_markup, to_edit_operations, EditOperation};

/// Strings biased towards markup: bullets, sub-bullets, bold markers, newlines.
fn markup_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("• ".to_string()),
            Just("  ◦ ".to_string()),
            Just("**".to_string()),
            Just("\n".to_string()),
            Just("*".to_string()),
            "[a-zé🚀 ]{0,6}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn check_operations(input: &str) -> Result<(), TestCaseError> {
    let segments = parse_markup(input);
    let ops = to_edit_operations(&segments, "obj");

    let text = match ops.first() {
        Some(EditOperation::InsertText { text, .. }) => text.clone(),
        other => return Err(TestCaseError::fail(format!("first op was {:?}", other))),
    };
    let flattened: String = segments.iter().map(|s| s.text.as_str()).collect();
    prop_assert_eq!(&text, &flattened);

    let chars: Vec<char> = text.chars().collect();
    let bold_segments = segments.iter().filter(|s| s.is_bold).count();
    let mut bold_ops = 0;

    for op in &ops[1..] {
        prop_assert_eq!(op.object_id(), "obj");
        let range = op.range().expect("style operations carry a range");
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= chars.len());

        match op {
            EditOperation::ApplyBoldStyle { .. } => bold_ops += 1,
            EditOperation::ApplyBulletPreset { .. } => {
                prop_assert!(!chars[range.start..range.end].contains(&'\n'));
            }
            EditOperation::InsertText { .. } => {
                return Err(TestCaseError::fail("insert after the first operation"));
            }
        }
    }
    prop_assert_eq!(bold_ops, bold_segments);

    let newlines = segments.iter().filter(|s| s.text == "\n").count();
    prop_assert_eq!(newlines, input.matches('\n').count());

    Ok(())
}

proptest! {
    #[test]
    fn test_any_string_compiles(input in ".*") {
        check_operations(&input)?;
    }

    #[test]
    fn test_markup_like_strings_compile(input in markup_like()) {
        check_operations(&input)?;
    }

    #[test]
    fn test_markup_free_line_is_one_plain_segment(input in "[A-Za-z0-9 .,:;!?-]{1,40}") {
        let segments = parse_markup(&input);

        prop_assert_eq!(segments.len(), 1);
        prop_assert_eq!(&segments[0].text, &input);
        prop_assert!(!segments[0].is_bold);
        prop_assert!(!segments[0].is_bullet);
    }
}
