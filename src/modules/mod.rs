//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for resources outside the process, currently the
//! local-disk storage sink.

pub mod storage;
