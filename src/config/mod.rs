//! Configuration models for the library and its audit trail.

pub mod library;

pub use library::{AuditBackendConfig, LibraryConfig};
