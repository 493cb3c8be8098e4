use serde::{Deserialize, Serialize};

/// One turn of the coach conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Body for `POST /coach`: the full transcript, newest message last.
#[derive(Debug, Clone, Serialize)]
pub struct CoachRequest {
    pub messages: Vec<ChatMessage>,
}

/// Coach reply. `sources` entries have varied by backend iteration
/// (bare URL strings or `{title, url}` objects), so they are kept as raw
/// JSON values and unpacked at render time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachResponse {
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub sources: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub market_data: serde_json::Value,
}

impl CoachResponse {
    /// Renders a source entry as display text, whatever shape it arrived in.
    pub fn source_label(source: &serde_json::Value) -> Option<String> {
        if let Some(s) = source.as_str() {
            return Some(s.to_string());
        }
        let title = source.get("title").and_then(|v| v.as_str());
        let url = source.get("url").and_then(|v| v.as_str());
        match (title, url) {
            (Some(t), Some(u)) => Some(format!("{t} - {u}")),
            (Some(t), None) => Some(t.to_string()),
            (None, Some(u)) => Some(u.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_label_string_form() {
        assert_eq!(
            CoachResponse::source_label(&json!("https://example.com")),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_source_label_object_form() {
        let source = json!({"title": "Salary Guide", "url": "https://example.com/guide"});
        assert_eq!(
            CoachResponse::source_label(&source),
            Some("Salary Guide - https://example.com/guide".to_string())
        );
    }

    #[test]
    fn test_source_label_unusable_shape() {
        assert_eq!(CoachResponse::source_label(&json!(42)), None);
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let resp: CoachResponse = serde_json::from_str(r#"{"reply": "hi"}"#).unwrap();
        assert_eq!(resp.reply, "hi");
        assert!(resp.sources.is_empty());
        assert!(resp.market_data.is_null());
    }
}
