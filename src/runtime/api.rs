//! Serializable command and response models for driving a library.

use serde::{Deserialize, Serialize};

use crate::core::{Book, BookLibrary, BookSnapshot, ErrorKind, LibraryError};
use crate::infra::InMemoryLibrary;
use crate::util::ids::{BookId, UserId};

/// A single library operation, tagged by `op` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LibraryCommand {
    /// Register a book.
    AddBook {
        /// Title of the new book.
        title: String,
    },
    /// Read a book's state.
    GetBook {
        /// Target book.
        book_id: BookId,
    },
    /// Join the queue for a held book.
    Enqueue {
        /// Target book.
        book_id: BookId,
        /// Waiting user.
        user: UserId,
    },
    /// Take a free book.
    Checkout {
        /// Target book.
        book_id: BookId,
        /// Taking user.
        user: UserId,
    },
    /// Give a book back.
    Return {
        /// Target book.
        book_id: BookId,
        /// Returning user.
        user: UserId,
    },
}

/// Outcome of a command, tagged by `status` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResponse {
    /// A book was registered.
    Added {
        /// Identifier of the new book.
        book_id: BookId,
    },
    /// Current state of a book.
    Book {
        /// The snapshot.
        book: BookSnapshot,
    },
    /// The operation was applied.
    Done,
    /// The operation was rejected; nothing changed.
    Error {
        /// Failure category.
        kind: ErrorKind,
        /// Human-readable reason.
        message: String,
    },
}

impl From<LibraryError> for CommandResponse {
    fn from(err: LibraryError) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Run one command against any library implementation.
pub fn execute_command(library: &dyn BookLibrary, command: LibraryCommand) -> CommandResponse {
    let result = match command {
        LibraryCommand::AddBook { title } => {
            return CommandResponse::Added {
                book_id: library.add_book(Book::new(title)),
            };
        }
        LibraryCommand::GetBook { book_id } => {
            library.get_book_by_id(book_id).map(|book| CommandResponse::Book { book })
        }
        LibraryCommand::Enqueue { book_id, user } => {
            library.enqueue(book_id, &user).map(|()| CommandResponse::Done)
        }
        LibraryCommand::Checkout { book_id, user } => {
            library.checkout_book(book_id, &user).map(|()| CommandResponse::Done)
        }
        LibraryCommand::Return { book_id, user } => {
            library.return_book(book_id, &user).map(|()| CommandResponse::Done)
        }
    };
    result.unwrap_or_else(CommandResponse::from)
}

/// Parse a JSON array of commands and run them in order. A rejected command
/// does not stop the script; its error is reported in place.
///
/// # Errors
///
/// Returns the parse error if `input` is not a JSON array of commands.
pub fn execute_script(library: &dyn BookLibrary, input: &str) -> Result<Vec<CommandResponse>, String> {
    let commands: Vec<LibraryCommand> =
        serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
    Ok(commands
        .into_iter()
        .map(|command| execute_command(library, command))
        .collect())
}

/// Snapshots of every book in registration order.
#[must_use]
pub fn list_books(library: &InMemoryLibrary) -> Vec<BookSnapshot> {
    library
        .book_ids()
        .into_iter()
        .filter_map(|id| library.get_book_by_id(id).ok())
        .collect()
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}
