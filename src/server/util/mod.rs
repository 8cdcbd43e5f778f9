//! Utility functions shared by services and controllers.

pub mod placeholder;
