use thiserror::Error;

/// Application-level error type. Commands return `Result<T, AppError>`;
/// `main` renders `user_message()` and exits non-zero. Full detail goes to
/// the tracing log, never to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The short human-readable sentence surfaced to the user. Failures
    /// never abort with a stack trace; the user resubmits manually.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { status, .. } => {
                format!("The Pathio service returned an error (status {status}). Please try again.")
            }
            AppError::Http(_) => {
                "Could not reach the Pathio service. Check your connection and try again.".to_string()
            }
            AppError::MissingInput(msg) => msg.clone(),
            AppError::Session(_) => "Could not read or write saved session data.".to_string(),
            AppError::Io(_) => "A local file operation failed.".to_string(),
            AppError::Internal(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status() {
        let err = AppError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert!(err.user_message().contains("502"));
        // Raw body text stays out of the user-facing sentence.
        assert!(!err.user_message().contains("bad gateway"));
    }

    #[test]
    fn test_missing_input_passes_through() {
        let err = AppError::MissingInput("No saved job. Run `pathio search` first.".to_string());
        assert_eq!(err.user_message(), "No saved job. Run `pathio search` first.");
    }
}
