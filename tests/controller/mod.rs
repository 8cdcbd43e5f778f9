//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the session being the in-memory one
//! from the test setup.

mod expense;
mod order;
mod product;
mod user;

use luxe::server::model::app::AppState;
use luxe_test_utils::prelude::*;

use crate::util::read_json;
