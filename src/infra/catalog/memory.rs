//! In-memory catalog with one lock per book.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::core::{
    build_lending_event, AuditSink, Book, BookLibrary, BookRecord, BookSnapshot, LendingAction,
    LibraryError, ReturnOutcome,
};
use crate::util::ids::BookId;

/// Registered records plus their registration order.
#[derive(Default)]
struct Catalog {
    records: HashMap<BookId, Arc<Mutex<BookRecord>>>,
    order: Vec<BookId>,
}

/// Reference library implementation.
///
/// The catalog index sits behind a `parking_lot::RwLock` that is only held
/// for lookups and registration. Each record has its own `parking_lot::Mutex`,
/// held across the whole check-then-mutate sequence of an operation, so
/// operations on one book are serialized while different books proceed
/// independently.
pub struct InMemoryLibrary {
    catalog: RwLock<Catalog>,
    /// Queue cap applied to every record registered from now on.
    max_queue_depth: Option<usize>,
    audit: Option<Arc<dyn AuditSink>>,
}

impl fmt::Debug for InMemoryLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryLibrary")
            .field("books", &self.len())
            .field("max_queue_depth", &self.max_queue_depth)
            .field("audit_enabled", &self.audit.is_some())
            .finish()
    }
}

impl Default for InMemoryLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLibrary {
    /// Create an empty library with unbounded queues and no audit sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog::default()),
            max_queue_depth: None,
            audit: None,
        }
    }

    /// Cap queue length for books registered after this call.
    #[must_use]
    pub fn with_max_queue_depth(mut self, max_queue_depth: Option<usize>) -> Self {
        self.max_queue_depth = max_queue_depth;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Number of registered books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.read().order.len()
    }

    /// Whether no book is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers of all books in registration order.
    #[must_use]
    pub fn book_ids(&self) -> Vec<BookId> {
        self.catalog.read().order.clone()
    }

    /// Look up a record handle; the index lock is released before returning.
    fn record(&self, id: BookId) -> Result<Arc<Mutex<BookRecord>>, LibraryError> {
        self.catalog
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(LibraryError::NotFound(id))
    }

    fn record_audit(&self, id: BookId, user: Option<&str>, action: LendingAction) {
        if let Some(sink) = &self.audit {
            sink.record(build_lending_event(id, user, action));
        }
    }
}

impl BookLibrary for InMemoryLibrary {
    fn add_book(&self, book: Book) -> BookId {
        let id = BookId::new();
        let record = BookRecord::new(id, book).with_max_queue_depth(self.max_queue_depth);
        {
            let mut catalog = self.catalog.write();
            catalog.records.insert(id, Arc::new(Mutex::new(record)));
            catalog.order.push(id);
        }
        self.record_audit(id, None, LendingAction::Register);
        tracing::debug!("registered book {}", id);
        id
    }

    fn get_book_by_id(&self, id: BookId) -> Result<BookSnapshot, LibraryError> {
        let record = self.record(id)?;
        let snapshot = record.lock().snapshot();
        Ok(snapshot)
    }

    fn enqueue(&self, id: BookId, user: &str) -> Result<(), LibraryError> {
        let record = self.record(id)?;
        let mut guard = record.lock();
        guard.enqueue(user)?;
        self.record_audit(id, Some(user), LendingAction::Enqueue);
        tracing::debug!("user {} queued for book {} (depth={})", user, id, guard.queue().len());
        Ok(())
    }

    fn checkout_book(&self, id: BookId, user: &str) -> Result<(), LibraryError> {
        let record = self.record(id)?;
        let mut guard = record.lock();
        guard.checkout(user)?;
        self.record_audit(id, Some(user), LendingAction::Checkout);
        tracing::info!("book {} checked out by {}", id, user);
        Ok(())
    }

    fn return_book(&self, id: BookId, user: &str) -> Result<(), LibraryError> {
        let record = self.record(id)?;
        let mut guard = record.lock();
        match guard.return_book(user)? {
            ReturnOutcome::Released => {
                self.record_audit(id, Some(user), LendingAction::Return);
                tracing::info!("book {} returned by {} and is free", id, user);
            }
            ReturnOutcome::Promoted { next } => {
                self.record_audit(id, Some(next.as_str()), LendingAction::Promote);
                tracing::info!("book {} returned by {}, passed to {}", id, user, next);
            }
        }
        Ok(())
    }
}
