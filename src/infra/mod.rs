//! Library implementations backing the [`crate::core::BookLibrary`] contract.

pub mod catalog;
pub use catalog::InMemoryLibrary;
