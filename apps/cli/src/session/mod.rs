//! Typed session store for handing data between flows.
//!
//! The original web client passed payloads between pages through browser
//! localStorage under bare string keys. This is the same contract made
//! explicit: one JSON file per key under the state directory, last writer
//! wins, a missing or unparseable entry reads as `None` (never an error),
//! no TTL. Each value is wrapped in an envelope recording when it was
//! saved; the timestamp is informational only.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

/// Job selected from search results for viewing.
pub const SELECTED_JOB: &str = "selectedJob";
/// Job carried into the tailoring flow.
pub const JOB_TO_APPLY: &str = "jobToApply";
/// Output of the last tailoring run, consumed by the results flow.
pub const TAILORED_RESULTS: &str = "tailoredResults";
/// Free-text job description pasted by the user instead of a search pick.
pub const PASTED_JOB: &str = "pastedJob";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    saved_at: DateTime<Utc>,
    value: T,
}

/// File-backed key/value store scoped to one state directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Writes a value under a key, replacing any previous value.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::Session(format!("cannot create state dir: {e}")))?;
        let envelope = Envelope {
            saved_at: Utc::now(),
            value,
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| AppError::Session(format!("cannot encode '{key}': {e}")))?;
        fs::write(self.path_for(key), json)
            .map_err(|e| AppError::Session(format!("cannot write '{key}': {e}")))
    }

    /// Reads a value by key. Absence is not an error; an entry that fails
    /// to parse is treated as absent (and logged), matching the original
    /// reader behavior.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.path_for(key)).ok()?;
        match serde_json::from_str::<Envelope<T>>(&raw) {
            Ok(envelope) => Some(envelope.value),
            Err(e) => {
                warn!("Discarding unparseable session entry '{key}': {e}");
                None
            }
        }
    }

    /// Removes a key. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Session(format!("cannot remove '{key}': {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Job;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_roundtrip() {
        let (_dir, store) = store();
        let job = Job {
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        };
        store.put(SELECTED_JOB, &job).unwrap();

        let loaded: Job = store.get(SELECTED_JOB).unwrap();
        assert_eq!(loaded.title, "Backend Engineer");
        assert_eq!(loaded.company, "Acme");
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, store) = store();
        assert!(store.get::<Job>(TAILORED_RESULTS).is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let (_dir, store) = store();
        store.put(PASTED_JOB, &"first".to_string()).unwrap();
        store.put(PASTED_JOB, &"second".to_string()).unwrap();
        assert_eq!(store.get::<String>(PASTED_JOB).unwrap(), "second");
    }

    #[test]
    fn test_unparseable_entry_reads_as_absent() {
        let (dir, store) = store();
        fs::write(dir.path().join("jobToApply.json"), "not json at all").unwrap();
        assert!(store.get::<Job>(JOB_TO_APPLY).is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store.put(SELECTED_JOB, &"x".to_string()).unwrap();
        store.remove(SELECTED_JOB).unwrap();
        store.remove(SELECTED_JOB).unwrap();
        assert!(store.get::<String>(SELECTED_JOB).is_none());
    }
}
