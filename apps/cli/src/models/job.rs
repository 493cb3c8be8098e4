use serde::{Deserialize, Serialize};

/// Body for `POST /search-jobs`. Every criterion is optional; the backend
/// falls back to broad results when none are given.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Resume text for personalized match scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_resume: Option<String>,
}

/// One job posting as returned by the backend's aggregated search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub match_score: Option<i64>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub total_found: usize,
    #[serde(default)]
    pub showing: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_absent_criteria() {
        let req = JobSearchRequest {
            job_title: Some("Software Engineer".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["job_title"], "Software Engineer");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_job_deserializes_with_missing_fields() {
        let json = r#"{"title": "Backend Engineer", "company": "Acme"}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.location, "");
        assert!(job.match_score.is_none());
        assert!(job.requirements.is_empty());
    }

    #[test]
    fn test_job_type_field_renamed() {
        let json = r#"{"title": "x", "type": "Full-time"}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, "Full-time");
    }
}
