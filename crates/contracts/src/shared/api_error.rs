//! Extraction of user-facing messages from error responses.

use serde::Deserialize;

/// Error body shapes seen from the listings service and from our own proxy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// First non-empty string among `detail` and `message`.
    pub fn text(&self) -> Option<String> {
        [&self.detail, &self.message]
            .into_iter()
            .flatten()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Message to show for a failed request, or `fallback` if the body has none.
pub fn user_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.text())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_message() {
        let body = r#"{"detail": "Quantity too large", "message": "ignored"}"#;
        assert_eq!(user_message(body, "fallback"), "Quantity too large");
    }

    #[test]
    fn test_message_used_when_no_detail() {
        assert_eq!(
            user_message(r#"{"message": "Bad header row"}"#, "CSV upload failed"),
            "Bad header row"
        );
    }

    #[test]
    fn test_fallbacks() {
        // field-keyed validation errors carry no top-level text
        assert_eq!(
            user_message(r#"{"quantity": ["This field is required."]}"#, "fallback"),
            "fallback"
        );
        assert_eq!(user_message(r#"{"detail": ["a", "b"]}"#, "fallback"), "fallback");
        assert_eq!(user_message(r#"{"detail": "  "}"#, "fallback"), "fallback");
        assert_eq!(user_message("<html>502</html>", "fallback"), "fallback");
        assert_eq!(user_message("", "fallback"), "fallback");
    }
}
