//! Utility functions for controller request handling.
//!
//! Protected endpoints resolve their caller through [`get_user::get_user_from_session`].

pub mod get_user;
