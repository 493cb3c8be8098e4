use serde::{Deserialize, Serialize};

/// Body for `POST /api/ai-tools/search`.
#[derive(Debug, Clone, Serialize)]
pub struct AiToolSearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One curated AI tool entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiTool {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pricing: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiToolSearchResponse {
    #[serde(default)]
    pub tools: Vec<AiTool>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub search_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_deserializes_from_curated_entry() {
        let json = r#"{
            "name": "ChatGPT",
            "description": "Conversational AI",
            "pricing": "Freemium",
            "website": "https://chat.openai.com",
            "features": ["AI Writing", "Brainstorming"],
            "rating": 4.8,
            "category": "Writing & Content"
        }"#;
        let tool: AiTool = serde_json::from_str(json).unwrap();
        assert_eq!(tool.name, "ChatGPT");
        assert_eq!(tool.features.len(), 2);
        assert_eq!(tool.rating, Some(4.8));
    }
}
