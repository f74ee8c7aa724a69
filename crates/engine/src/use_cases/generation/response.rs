//! Completion post-processing: fence stripping and JSON parsing.
//!
//! Models wrap JSON in markdown fences no matter how firmly the prompt says
//! not to, so the raw text is unwrapped before parsing. Anything that still
//! fails to parse is surfaced with the offending text attached.

use super::GenerationError;

/// Strip a wrapping markdown code fence (with optional `json` language tag).
///
/// Unfenced text is only trimmed. A fence without a closing marker is
/// tolerated; whatever remains goes to the parser, which reports the real
/// problem.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let unfenced = trimmed.trim_matches('`');
    let unfenced = unfenced.strip_prefix("json").unwrap_or(unfenced);
    unfenced.trim()
}

/// Parse completion text into a JSON value, stripping fences first.
pub fn parse_json_payload(raw: &str) -> Result<serde_json::Value, GenerationError> {
    let content = strip_code_fences(raw);
    serde_json::from_str(content).map_err(|e| GenerationError::ResponseFormat {
        message: e.to_string(),
        raw: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_and_bare_json_parse_identically() {
        let bare = r#"{"title": "The Sunken Bell", "steps": []}"#;
        let fenced = format!("```json\n{bare}\n```");
        assert_eq!(
            parse_json_payload(bare).unwrap(),
            parse_json_payload(&fenced).unwrap()
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = "```\n{\"ok\": true}\n```";
        assert_eq!(
            parse_json_payload(fenced).unwrap(),
            serde_json::json!({"ok": true})
        );
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  {\"a\": 1} \n"), "{\"a\": 1}");
    }

    #[test]
    fn test_unclosed_fence_is_tolerated() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_malformed_json_raises_response_format_error() {
        let err = parse_json_payload("{not valid").unwrap_err();
        match err {
            GenerationError::ResponseFormat { raw, .. } => assert_eq!(raw, "{not valid"),
            other => panic!("expected ResponseFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_response_format_error_carries_raw_text() {
        let err = parse_json_payload("```json\nnot json at all\n```").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("Failed to parse JSON from LLM response"));
        assert!(rendered.contains("not json at all"));
    }
}
