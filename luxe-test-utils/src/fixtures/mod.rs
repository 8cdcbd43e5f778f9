//! Test fixture modules for database rows and mock gateway endpoints.
//!
//! Each submodule adds an accessor on [`TestSetup`](crate::TestSetup) returning a fixture
//! struct that borrows the setup, e.g. `test.user().insert_user(..)`. `factory` holds pure
//! functions building in-memory models for unit tests that never touch the database.

pub mod expense;
pub mod factory;
pub mod notification;
pub mod order;
pub mod paystack;
pub mod product;
pub mod user;
