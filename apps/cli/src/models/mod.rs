//! Typed request/response shapes for the Pathio backend API.
//!
//! The backend is an external collaborator; these types model only the
//! fields this client depends on. Every response field is defaulted so a
//! malformed or partial payload degrades to empty values rather than a
//! deserialization error.

pub mod analytics;
pub mod coach;
pub mod job;
pub mod tailor;
pub mod tools;
