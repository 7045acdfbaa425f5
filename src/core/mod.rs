//! Lending state machine, library contract and audit trail.

pub mod audit;
pub mod error;
pub mod lending;
pub mod library;

pub use audit::{AuditSink, InMemoryAuditSink, LendingAction, LendingEvent, build_lending_event};
pub use error::{AppResult, ErrorKind, InvalidOperation, LibraryError};
pub use lending::{Book, BookRecord, BookSnapshot, LendingState, ReturnOutcome};
pub use library::BookLibrary;
