//! Helpers shared by every tool definition.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domains::tools::ToolError;

/// Decode raw call arguments into a tool's parameter struct.
///
/// Missing arguments decode as an empty object so tools whose parameters are
/// all defaulted can be called without any.
pub fn parse_arguments<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// A successful result carrying `payload` as JSON text and structured content.
pub fn json_result<T: Serialize>(payload: &T) -> Result<CallToolResult, ToolError> {
    build_json_result(payload, false)
}

/// A failed result carrying `{"error": message}`.
///
/// Used for expected validation failures, which are reported to the client as
/// ordinary results with the error flag set rather than as protocol errors.
pub fn error_payload_result(message: &str) -> Result<CallToolResult, ToolError> {
    build_json_result(&serde_json::json!({ "error": message }), true)
}

fn build_json_result<T: Serialize>(payload: &T, is_error: bool) -> Result<CallToolResult, ToolError> {
    let structured = serde_json::to_value(payload)
        .map_err(|e| ToolError::internal(format!("Failed to serialize tool result: {}", e)))?;
    let text = serde_json::to_string(&structured)
        .map_err(|e| ToolError::internal(format!("Failed to serialize tool result: {}", e)))?;

    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(structured),
        is_error: Some(is_error),
        meta: None,
    })
}

#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult, index: usize) -> &str {
    match &result.content[index].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        #[serde(default)]
        count: u32,
    }

    #[test]
    fn test_parse_arguments() {
        let mut args = JsonObject::new();
        args.insert("name".to_string(), serde_json::json!("Oslo"));
        let sample: Sample = parse_arguments(Some(args)).unwrap();
        assert_eq!(sample.name, "Oslo");
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn test_parse_arguments_missing_required() {
        let err = parse_arguments::<Sample>(None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_json_result() {
        let result = json_result(&serde_json::json!({ "result": 1.5 })).unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result, 0), r#"{"result":1.5}"#);
        assert_eq!(result.structured_content.unwrap()["result"], 1.5);
    }

    #[test]
    fn test_error_payload_result() {
        let result = error_payload_result("Days must be between 1 and 10").unwrap();
        assert_eq!(result.is_error, Some(true));

        let parsed: serde_json::Value = serde_json::from_str(result_text(&result, 0)).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({ "error": "Days must be between 1 and 10" })
        );
    }
}
