//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application
//! state handed to every handler and the session data structures used for authentication.

pub mod app;
pub mod session;
