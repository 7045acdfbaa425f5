//! Builders to construct libraries from configuration.

pub mod library_builder;

pub use library_builder::{build_library, LibraryBuilder};
