//! # Lending Library
//!
//! A catalog of books where each book is either available or held by exactly
//! one user, with a first-come-first-served waiting queue for users who want
//! a book somebody else holds.
//!
//! ## Lending rules
//!
//! - **Checkout** succeeds only on a free book with nobody waiting.
//! - **Enqueue** is only meaningful while the book is held: a free book is
//!   checked out instead, a user waits at most once, and the holder cannot
//!   wait for their own book.
//! - **Return** by the holder hands the book to the head of the queue, or
//!   frees it when nobody waits. A queued user never takes a book by checkout.
//!
//! Every operation is atomic per book: a rejected operation changes nothing.
//!
//! ```rust
//! use lending_library::core::{Book, BookLibrary, ErrorKind};
//! use lending_library::infra::InMemoryLibrary;
//!
//! let library = InMemoryLibrary::new();
//! let id = library.add_book(Book::new("Книга1"));
//!
//! // Nothing to wait for yet.
//! let err = library.enqueue(id, "User1").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidOperation);
//!
//! library.checkout_book(id, "User0")?;
//! library.enqueue(id, "User1")?;
//! library.return_book(id, "User0")?;
//!
//! let book = library.get_book_by_id(id)?;
//! assert_eq!(book.holder.as_deref(), Some("User1"));
//! assert!(book.queue.is_empty());
//! # Ok::<(), lending_library::core::LibraryError>(())
//! ```
//!
//! ## Building from configuration
//!
//! ```rust,ignore
//! use lending_library::builders::LibraryBuilder;
//!
//! lending_library::util::init_tracing();
//! let library = LibraryBuilder::from_env()?.build()?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Lending state machine, library contract, errors and audit trail.
pub mod core;
/// Configuration models for the library and its audit trail.
pub mod config;
/// Builders to construct libraries from configuration.
pub mod builders;
/// Library implementations.
pub mod infra;
/// Serializable command surface for driving a library.
pub mod runtime;
/// Shared utilities.
pub mod util;
