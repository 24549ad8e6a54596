//! Service metadata and health endpoints.
//!
//! Both endpoints are static: `/health` reports the service as up without
//! probing storage or the database.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use routes::routes;
