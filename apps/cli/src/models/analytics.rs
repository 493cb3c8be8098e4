use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `POST /api/analytics/resume`.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysisRequest {
    pub resume_text: String,
}

/// Structured career analysis for a resume. The nested market/salary/
/// industry objects are free-form backend payloads rendered as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerAnalysis {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: i64,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub career_level: String,
    #[serde(default)]
    pub market_value: Value,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    #[serde(default)]
    pub salary_insights: Value,
    #[serde(default)]
    pub industry_insights: Value,
}
