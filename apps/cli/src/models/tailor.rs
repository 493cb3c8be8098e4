use serde::{Deserialize, Serialize};

/// Body for `POST /quick-tailor`.
#[derive(Debug, Clone, Serialize)]
pub struct QuickTailorRequest {
    pub resume_text: String,
    pub job_text: String,
}

/// Keyword and ATS insights attached to a tailoring run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub match_score: i64,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub present_keywords: Vec<String>,
    #[serde(default)]
    pub ats_flags: Vec<String>,
    /// Quick improvement tasks the user can mark done.
    #[serde(default)]
    pub do_now: Vec<String>,
    /// Longer-term improvement tasks.
    #[serde(default)]
    pub do_long: Vec<String>,
}

/// Full result of a tailoring run. Persisted between the `apply` and
/// `results` flows; the augmenter rewrites `tailored_resume_md` in place
/// as tasks are completed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TailoredResults {
    #[serde(default)]
    pub tailored_resume_md: String,
    #[serde(default)]
    pub cover_letter_md: String,
    #[serde(default)]
    pub what_changed_md: String,
    #[serde(default)]
    pub llm_ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub insights: Insights,
    /// Tasks the user has marked done, in completion order. Client-side
    /// state; the backend never sees this field.
    #[serde(default)]
    pub completed_tasks: Vec<String>,
}

/// Body for `POST /export`. `which` selects the document.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub which: String,
    pub tailored_resume_md: String,
    pub cover_letter_md: String,
}
