//! One canonical controller per user flow. Each owns its input handling,
//! makes at most one backend call at a time behind a spinner, renders the
//! response, and hands data to the next flow through the session store.

pub mod analytics;
pub mod apply;
pub mod coach;
pub mod results;
pub mod search;
pub mod tools;

use std::io::Read;
use std::path::Path;

use crate::errors::AppError;

/// Reads resume text from a file, or from stdin when no path is given.
pub(crate) fn read_resume_text(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            if text.trim().is_empty() {
                return Err(AppError::MissingInput(format!(
                    "Resume file {} is empty.",
                    path.display()
                )));
            }
            Ok(text)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            if buf.trim().is_empty() {
                return Err(AppError::MissingInput(
                    "No resume text. Pass --resume <file> or pipe text on stdin.".to_string(),
                ));
            }
            Ok(buf)
        }
    }
}
