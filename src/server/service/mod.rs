//! Service layer for business logic.
//!
//! Services validate requests, coordinate repositories and record the notifications each
//! operation produces. Operations touching several rows run inside a single transaction.

pub mod expense;
pub mod notification;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
