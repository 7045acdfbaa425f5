//! Tests for utility functions

use lending_library::util::{now_ms, BookId};

#[test]
fn test_book_ids_are_unique() {
    let a = BookId::new();
    let b = BookId::new();
    assert_ne!(a, b);
}

#[test]
fn test_book_id_parses_its_display_form() {
    let id = BookId::new();
    let parsed: BookId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<BookId>().is_err());
}

#[test]
fn test_book_id_serializes_as_plain_string() {
    let id = BookId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

#[test]
fn test_now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[test]
fn test_init_tracing_is_idempotent() {
    lending_library::util::init_tracing_with("lending_library=debug");
    lending_library::util::init_tracing();
}
