//! Audit trail of lending transitions.
//!
//! Only successful transitions are recorded; rejected operations are returned
//! to the caller and leave no trace here.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::util::clock::now_ms;
use crate::util::ids::{BookId, UserId};

/// Transition recorded by the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LendingAction {
    /// Book registered in the catalog.
    Register,
    /// User took a free book.
    Checkout,
    /// User joined the queue.
    Enqueue,
    /// Holder returned the book and it became free.
    Return,
    /// Holder returned the book and the queue head took it over.
    Promote,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingEvent {
    /// Event identifier.
    pub event_id: String,
    /// Book the transition applied to.
    pub book_id: BookId,
    /// User who acted (or was promoted); `None` for registration.
    pub user: Option<UserId>,
    /// Transition taken.
    pub action: LendingAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction. Shared between threads by the library, so
/// recording goes through `&self`.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: LendingEvent);
}

/// Bounded in-memory audit sink; the oldest event is evicted when full.
///
/// Clones share one buffer, so a test can keep a handle while the library
/// owns another.
#[derive(Debug, Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<LendingEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events.min(1024)))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<LendingEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Events recorded for one book, oldest first.
    #[must_use]
    pub fn events_for(&self, book_id: BookId) -> Vec<LendingEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.book_id == book_id)
            .cloned()
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, event: LendingEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Helper to build an audit event stamped with a fresh id and the current time.
pub fn build_lending_event(
    book_id: BookId,
    user: Option<&str>,
    action: LendingAction,
) -> LendingEvent {
    LendingEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        book_id,
        user: user.map(str::to_owned),
        action,
        created_at_ms: now_ms(),
    }
}
