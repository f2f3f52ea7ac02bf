//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_json_is_compact() {
        assert_eq!(format_json(&json!({"id": "use_abc"})), r#"{"id":"use_abc"}"#);
        assert_eq!(format_json(&Option::<u8>::None), "null");
    }
}
