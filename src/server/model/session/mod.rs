//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using tower-sessions. The
//! session cookie is the only credential the API accepts; the user ID stored behind it
//! identifies the caller of every protected route.

pub mod user;
