//! The library contract driven by callers.

use crate::core::{Book, BookSnapshot, LibraryError};
use crate::util::ids::BookId;

/// Abstraction over library implementations.
///
/// Implementations must be atomic per book: an operation either applies all
/// of its effects or returns an error and changes nothing. Unknown ids yield
/// [`LibraryError::NotFound`] before any lending rule is evaluated.
pub trait BookLibrary: Send + Sync {
    /// Register a book in the free state and return its fresh identifier.
    fn add_book(&self, book: Book) -> BookId;

    /// Read-only copy of a book's state.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] if no book has this id.
    fn get_book_by_id(&self, id: BookId) -> Result<BookSnapshot, LibraryError>;

    /// Put `user` at the tail of the queue for a held book.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`], or [`LibraryError::InvalidOperation`] when
    /// the book is free, `user` is already queued, or `user` holds the book.
    fn enqueue(&self, id: BookId, user: &str) -> Result<(), LibraryError>;

    /// Give a free book with no waiters to `user`.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`], or [`LibraryError::InvalidOperation`] when
    /// the book is held or has waiters.
    fn checkout_book(&self, id: BookId, user: &str) -> Result<(), LibraryError>;

    /// Release the book held by `user`, promoting the head of the queue.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`], or [`LibraryError::InvalidOperation`] when
    /// the book is free or held by someone else.
    fn return_book(&self, id: BookId, user: &str) -> Result<(), LibraryError>;
}
