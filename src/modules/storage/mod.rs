//! Storage module for uploaded file bytes
//!
//! Provides a local-disk sink that writes each upload under a freshly
//! generated name and reports the resulting path and size.

mod disk_sink;

pub use disk_sink::{DiskSink, StoredFile};
