//! Per-book lending state machine.
//!
//! A book is either [`LendingState::Free`] or [`LendingState::Held`]. While
//! held, other users may join a FIFO queue; returning the book hands it to
//! the head of that queue. Every operation validates all of its rules before
//! touching state, so a rejected operation leaves the record unchanged.
//!
//! Invariants kept by every transition:
//! - a free book has an empty queue,
//! - no user waits twice in the same queue,
//! - the holder never waits for the book they hold,
//! - the queue only grows at the tail and shrinks at the head.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::InvalidOperation;
use crate::util::ids::{BookId, UserId};

/// A registered title. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Book title.
    pub title: String,
}

impl Book {
    /// Create a book with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Coarse lending state of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LendingState {
    /// Nobody holds the book and nobody waits for it.
    Free,
    /// A user holds the book; others may be queued.
    Held,
}

/// What a successful return did to the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// Queue was empty; the book is free again.
    Released,
    /// The head of the queue became the new holder.
    Promoted {
        /// The promoted user.
        next: UserId,
    },
}

/// Read-only copy of a book's lending state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Book identifier.
    pub id: BookId,
    /// The registered book.
    pub book: Book,
    /// Current holder, `None` when available.
    pub holder: Option<UserId>,
    /// Waiting users, head first.
    pub queue: Vec<UserId>,
}

impl BookSnapshot {
    /// Lending state derived from the holder.
    #[must_use]
    pub const fn state(&self) -> LendingState {
        if self.holder.is_some() {
            LendingState::Held
        } else {
            LendingState::Free
        }
    }
}

/// Lending record for one book: holder plus waiting queue.
#[derive(Debug, Clone)]
pub struct BookRecord {
    id: BookId,
    book: Book,
    holder: Option<UserId>,
    queue: VecDeque<UserId>,
    /// `None` leaves the queue unbounded.
    max_queue_depth: Option<usize>,
}

impl BookRecord {
    /// Create a free record with an unbounded queue.
    #[must_use]
    pub const fn new(id: BookId, book: Book) -> Self {
        Self {
            id,
            book,
            holder: None,
            queue: VecDeque::new(),
            max_queue_depth: None,
        }
    }

    /// Cap the number of users that may wait at once.
    #[must_use]
    pub fn with_max_queue_depth(mut self, max_queue_depth: Option<usize>) -> Self {
        self.max_queue_depth = max_queue_depth;
        self
    }

    /// Book identifier.
    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// The registered book.
    #[must_use]
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// Current holder.
    #[must_use]
    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    /// Waiting users, head first.
    #[must_use]
    pub const fn queue(&self) -> &VecDeque<UserId> {
        &self.queue
    }

    /// Zero-based queue position of `user`.
    #[must_use]
    pub fn position_of(&self, user: &str) -> Option<usize> {
        self.queue.iter().position(|u| u == user)
    }

    /// Current lending state.
    #[must_use]
    pub const fn state(&self) -> LendingState {
        if self.holder.is_some() {
            LendingState::Held
        } else {
            LendingState::Free
        }
    }

    /// Join the queue for a held book.
    ///
    /// # Errors
    ///
    /// Rules are checked in order and the first violation is returned:
    /// [`InvalidOperation::BookIsFree`], [`InvalidOperation::AlreadyQueued`],
    /// [`InvalidOperation::AlreadyHolds`], [`InvalidOperation::QueueFull`].
    pub fn enqueue(&mut self, user: &str) -> Result<(), InvalidOperation> {
        let Some(holder) = self.holder.as_deref() else {
            return Err(InvalidOperation::BookIsFree);
        };
        if self.position_of(user).is_some() {
            return Err(InvalidOperation::AlreadyQueued { user: user.to_owned() });
        }
        if holder == user {
            return Err(InvalidOperation::AlreadyHolds {
                user: user.to_owned(),
                title: self.book.title.clone(),
                book_id: self.id,
            });
        }
        if let Some(max) = self.max_queue_depth {
            if self.queue.len() >= max {
                return Err(InvalidOperation::QueueFull {
                    user: user.to_owned(),
                    book_id: self.id,
                    depth: self.queue.len(),
                });
            }
        }

        self.queue.push_back(user.to_owned());
        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Take a free book.
    ///
    /// Only a free book with an empty queue can be checked out. Queued users
    /// get the book through [`BookRecord::return_book`], never by checkout.
    ///
    /// # Errors
    ///
    /// [`InvalidOperation::BookHeld`] if anyone holds the book, including a
    /// queued `user`; [`InvalidOperation::QueueNotEmpty`] if users are waiting.
    pub fn checkout(&mut self, user: &str) -> Result<(), InvalidOperation> {
        if let Some(holder) = &self.holder {
            return Err(InvalidOperation::BookHeld {
                holder: holder.clone(),
                title: self.book.title.clone(),
                book_id: self.id,
            });
        }
        if !self.queue.is_empty() {
            return Err(InvalidOperation::QueueNotEmpty {
                book_id: self.id,
                waiting: self.queue.len(),
            });
        }

        self.holder = Some(user.to_owned());
        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Give the book back, handing it to the head of the queue if any.
    ///
    /// # Errors
    ///
    /// [`InvalidOperation::NotCheckedOut`] for a free book,
    /// [`InvalidOperation::NotHolder`] when `user` is not the holder.
    pub fn return_book(&mut self, user: &str) -> Result<ReturnOutcome, InvalidOperation> {
        let Some(holder) = self.holder.as_deref() else {
            return Err(InvalidOperation::NotCheckedOut { book_id: self.id });
        };
        if holder != user {
            return Err(InvalidOperation::NotHolder {
                user: user.to_owned(),
                holder: holder.to_owned(),
                book_id: self.id,
            });
        }

        self.holder = self.queue.pop_front();
        debug_assert!(self.invariants_hold());
        Ok(match &self.holder {
            Some(next) => ReturnOutcome::Promoted { next: next.clone() },
            None => ReturnOutcome::Released,
        })
    }

    /// Whether the structural invariants hold: a free book has no waiters,
    /// no duplicate waiters, and the holder is not waiting.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let Some(holder) = self.holder.as_deref() else {
            return self.queue.is_empty();
        };
        self.queue
            .iter()
            .enumerate()
            .all(|(i, u)| u != holder && !self.queue.iter().skip(i + 1).any(|v| v == u))
    }

    /// Copy out the current state.
    #[must_use]
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            id: self.id,
            book: self.book.clone(),
            holder: self.holder.clone(),
            queue: self.queue.iter().cloned().collect(),
        }
    }
}
