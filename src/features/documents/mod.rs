//! Document upload and listing feature.
//!
//! An upload writes the file bytes to the storage sink first, then records a
//! metadata row in the `documents` table. Listing reads the whole table back.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/upload` | Upload a single file and record its metadata |
//! | GET | `/documents` | List all stored documents |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DocumentService;
