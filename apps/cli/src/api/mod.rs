//! API client, the single point of entry for all Pathio backend calls.
//!
//! No other module may issue HTTP requests. Failure semantics follow the
//! original client: each call is awaited once, there is no retry, backoff,
//! or cancellation; at most one request is in flight per flow. A failed
//! call ends the loading state and leaves prior content untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::analytics::{CareerAnalysis, ResumeAnalysisRequest};
use crate::models::coach::{CoachRequest, CoachResponse};
use crate::models::job::{JobSearchRequest, JobSearchResponse};
use crate::models::tailor::{ExportRequest, QuickTailorRequest, TailoredResults};
use crate::models::tools::{AiToolSearchRequest, AiToolSearchResponse};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

/// Error body shape the backend emits for failed requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: String,
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::Http)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts a JSON body and decodes a JSON response, mapping non-success
    /// statuses to `AppError::Api` with the backend's detail message when
    /// the body parses.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// Maps a non-success response to `AppError::Api`, extracting the
    /// backend's detail message when the body parses.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /search-jobs`: aggregated job search with optional criteria.
    pub async fn search_jobs(
        &self,
        request: &JobSearchRequest,
    ) -> Result<JobSearchResponse, AppError> {
        self.post_json("/search-jobs", request).await
    }

    /// `POST /quick-tailor`: tailors a resume to a job description and
    /// returns the rewritten documents plus keyword insights.
    pub async fn quick_tailor(
        &self,
        request: &QuickTailorRequest,
    ) -> Result<TailoredResults, AppError> {
        self.post_json("/quick-tailor", request).await
    }

    /// `POST /coach`: one turn of the career-coach conversation.
    pub async fn coach(&self, request: &CoachRequest) -> Result<CoachResponse, AppError> {
        self.post_json("/coach", request).await
    }

    /// `POST /export`: renders the tailored resume or cover letter as a
    /// DOCX document and returns the raw bytes.
    pub async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .post(self.url("/export"))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `POST /api/analytics/resume`: career analysis from resume text.
    pub async fn analyze_resume(&self, resume_text: String) -> Result<CareerAnalysis, AppError> {
        self.post_json(
            "/api/analytics/resume",
            &ResumeAnalysisRequest { resume_text },
        )
        .await
    }

    /// `POST /api/analytics/resume-upload`: career analysis from an
    /// uploaded resume file (PDF, DOCX, or TXT); the backend extracts the
    /// text.
    pub async fn analyze_resume_file(
        &self,
        path: &std::path::Path,
    ) -> Result<CareerAnalysis, AppError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        debug!("POST /api/analytics/resume-upload");
        let response = self
            .client
            .post(self.url("/api/analytics/resume-upload"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /api/ai-tools/search`: curated AI-tool search.
    pub async fn search_ai_tools(
        &self,
        request: &AiToolSearchRequest,
    ) -> Result<AiToolSearchResponse, AppError> {
        self.post_json("/api/ai-tools/search", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.url("/coach"), "http://localhost:8000/coach");
    }

    #[test]
    fn test_error_body_parses_backend_detail() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "AI tools search failed"}"#).unwrap();
        assert_eq!(body.detail, "AI tools search failed");
    }
}
