//! Tests for audit sink

use lending_library::core::{build_lending_event, AuditSink, InMemoryAuditSink, LendingAction};
use lending_library::util::BookId;

#[test]
fn test_in_memory_audit_sink() {
    let sink = InMemoryAuditSink::new(10);
    let id = BookId::new();

    sink.record(build_lending_event(id, Some("User1"), LendingAction::Checkout));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].book_id, id);
    assert_eq!(events[0].user.as_deref(), Some("User1"));
    assert_eq!(events[0].action, LendingAction::Checkout);
}

#[test]
fn test_audit_sink_overflow() {
    let sink = InMemoryAuditSink::new(2);
    let id = BookId::new();

    sink.record(build_lending_event(id, None, LendingAction::Register));
    sink.record(build_lending_event(id, Some("a"), LendingAction::Checkout));
    sink.record(build_lending_event(id, Some("b"), LendingAction::Enqueue));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, LendingAction::Checkout); // Register evicted
    assert_eq!(events[1].action, LendingAction::Enqueue);
}

#[test]
fn test_zero_capacity_sink_keeps_nothing() {
    let sink = InMemoryAuditSink::new(0);
    sink.record(build_lending_event(BookId::new(), None, LendingAction::Register));
    assert!(sink.events().is_empty());
}

#[test]
fn test_clones_share_events() {
    let sink = InMemoryAuditSink::new(4);
    let handle = sink.clone();
    let a = BookId::new();
    let b = BookId::new();

    sink.record(build_lending_event(a, Some("x"), LendingAction::Checkout));
    sink.record(build_lending_event(b, Some("y"), LendingAction::Checkout));

    assert_eq!(handle.events().len(), 2);
    assert_eq!(handle.events_for(b).len(), 1);
    assert_eq!(handle.events_for(b)[0].user.as_deref(), Some("y"));
}

#[test]
fn test_build_lending_event() {
    let id = BookId::new();
    let first = build_lending_event(id, Some("User1"), LendingAction::Promote);
    let second = build_lending_event(id, Some("User1"), LendingAction::Promote);

    assert_ne!(first.event_id, second.event_id);
    assert_eq!(first.action, LendingAction::Promote);
    assert!(first.created_at_ms > 0);
}
