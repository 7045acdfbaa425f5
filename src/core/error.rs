//! Error types for lending operations.

use thiserror::Error;

use crate::util::ids::{BookId, UserId};

/// Broad failure category callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The referenced book does not exist.
    NotFound,
    /// A lending rule rejected the operation.
    InvalidOperation,
}

/// A lending rule violated by enqueue, checkout or return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    /// Enqueue on a book nobody holds.
    #[error("Cannot enqueue if book is free and queue is empty. Checkout book instead.")]
    BookIsFree,
    /// Enqueue by a user already waiting.
    #[error("User '{user}' is already in queue")]
    AlreadyQueued {
        /// The waiting user.
        user: UserId,
    },
    /// Enqueue by the current holder.
    #[error("Cannot enqueue user '{user}' for book '{title}' with id '{book_id}', which user holds")]
    AlreadyHolds {
        /// The holder who tried to enqueue.
        user: UserId,
        /// Title of the book.
        title: String,
        /// Identifier of the book.
        book_id: BookId,
    },
    /// Enqueue on a queue at its configured depth.
    #[error("Cannot enqueue user '{user}': queue for book '{book_id}' is full ({depth} waiting)")]
    QueueFull {
        /// The rejected user.
        user: UserId,
        /// Identifier of the book.
        book_id: BookId,
        /// Current (maximum) queue depth.
        depth: usize,
    },
    /// Checkout of a book somebody holds.
    #[error("Cannot checkout book '{title}' with id '{book_id}': it is held by '{holder}'")]
    BookHeld {
        /// Current holder.
        holder: UserId,
        /// Title of the book.
        title: String,
        /// Identifier of the book.
        book_id: BookId,
    },
    /// Bare checkout while users are waiting; only a return promotes a waiter.
    #[error("Cannot checkout book with id '{book_id}' while {waiting} user(s) are queued")]
    QueueNotEmpty {
        /// Identifier of the book.
        book_id: BookId,
        /// Number of waiting users.
        waiting: usize,
    },
    /// Return of a book nobody holds.
    #[error("Cannot return book with id '{book_id}': it is not checked out")]
    NotCheckedOut {
        /// Identifier of the book.
        book_id: BookId,
    },
    /// Return by someone other than the holder.
    #[error("Cannot return book with id '{book_id}': held by '{holder}', not '{user}'")]
    NotHolder {
        /// User who attempted the return.
        user: UserId,
        /// Actual holder.
        holder: UserId,
        /// Identifier of the book.
        book_id: BookId,
    },
}

/// Errors produced by library operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// No book is registered under this identifier.
    #[error("book with id '{0}' not found")]
    NotFound(BookId),
    /// A lending rule rejected the operation.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),
}

impl LibraryError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidOperation(_) => ErrorKind::InvalidOperation,
        }
    }

    /// The violated rule, if this is an [`ErrorKind::InvalidOperation`].
    #[must_use]
    pub const fn rule(&self) -> Option<&InvalidOperation> {
        match self {
            Self::NotFound(_) => None,
            Self::InvalidOperation(rule) => Some(rule),
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
