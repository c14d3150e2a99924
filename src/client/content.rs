//! Decoding tool results into plain JSON values.

use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use tracing::debug;

/// Collapse a tool result's content into a single JSON value.
///
/// - no content gives `null`
/// - a single text item that starts with `{` or `[` and parses as JSON gives
///   the parsed value, any other single text gives the raw string
/// - several items give an array of their texts
///
/// Non-text items are represented as `null`.
pub fn extract_content(result: &CallToolResult) -> Value {
    match result.content.as_slice() {
        [] => {
            debug!("No content in response");
            Value::Null
        }
        [single] => match text_of(&single.raw) {
            Some(text) => parse_single_text(text),
            None => Value::Null,
        },
        items => {
            debug!("Multiple content items: {}", items.len());
            Value::Array(
                items
                    .iter()
                    .map(|item| {
                        text_of(&item.raw)
                            .map(|text| Value::String(text.to_string()))
                            .unwrap_or(Value::Null)
                    })
                    .collect(),
            )
        }
    }
}

fn text_of(content: &RawContent) -> Option<&str> {
    match content {
        RawContent::Text(text) => Some(&text.text),
        _ => None,
    }
}

fn parse_single_text(text: &str) -> Value {
    if text.starts_with('{') || text.starts_with('[') {
        match serde_json::from_str(text) {
            Ok(value) => return value,
            Err(e) => debug!("JSON decode error: {}", e),
        }
    }
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;
    use serde_json::json;

    fn texts(items: &[&str]) -> CallToolResult {
        CallToolResult::success(items.iter().map(|t| Content::text(t.to_string())).collect())
    }

    #[test]
    fn test_empty_content_is_null() {
        assert_eq!(extract_content(&texts(&[])), Value::Null);
    }

    #[test]
    fn test_single_json_object_is_parsed() {
        let result = texts(&[r#"{"result": 50.0}"#]);
        assert_eq!(extract_content(&result), json!({ "result": 50.0 }));
    }

    #[test]
    fn test_single_json_array_is_parsed() {
        let result = texts(&["[1, 2]"]);
        assert_eq!(extract_content(&result), json!([1, 2]));
    }

    #[test]
    fn test_invalid_json_falls_back_to_text() {
        let result = texts(&["{not json"]);
        assert_eq!(extract_content(&result), json!("{not json"));
    }

    #[test]
    fn test_plain_text_is_kept() {
        let result = texts(&["Hello, MCP World!"]);
        assert_eq!(extract_content(&result), json!("Hello, MCP World!"));
    }

    #[test]
    fn test_numeric_text_is_not_parsed() {
        let result = texts(&["42"]);
        assert_eq!(extract_content(&result), json!("42"));
    }

    #[test]
    fn test_multiple_items_become_array() {
        let result = texts(&["apple", "{\"a\":1}"]);
        assert_eq!(extract_content(&result), json!(["apple", "{\"a\":1}"]));
    }
}
