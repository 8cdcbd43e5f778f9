//! Server application core modules.
//!
//! All server-side functionality of the Luxe backend: HTTP routing and controllers, the
//! service layer holding the business rules, SeaORM repositories, the payment gateway client
//! and startup wiring for the database and session store.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
