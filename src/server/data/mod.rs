//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per entity. Each is generic over [`sea_orm::ConnectionTrait`]
//! so services can run the same queries against a plain connection or inside a transaction.

pub mod expense;
pub mod notification;
pub mod order;
pub mod product;
pub mod user;
