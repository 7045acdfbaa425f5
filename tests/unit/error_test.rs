//! Tests for error types

use lending_library::core::{ErrorKind, InvalidOperation, LibraryError};
use lending_library::util::BookId;

#[test]
fn test_not_found_error() {
    let id = BookId::new();
    let err = LibraryError::NotFound(id);
    assert_eq!(format!("{}", err), format!("book with id '{id}' not found"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.rule().is_none());
}

#[test]
fn test_book_is_free_error() {
    let err = LibraryError::from(InvalidOperation::BookIsFree);
    assert_eq!(
        format!("{}", err),
        "Cannot enqueue if book is free and queue is empty. Checkout book instead."
    );
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn test_already_queued_error() {
    let err = InvalidOperation::AlreadyQueued { user: "User1".into() };
    assert_eq!(format!("{}", err), "User 'User1' is already in queue");
}

#[test]
fn test_already_holds_error() {
    let id = BookId::new();
    let err = InvalidOperation::AlreadyHolds {
        user: "User1".into(),
        title: "Книга1".into(),
        book_id: id,
    };
    assert_eq!(
        format!("{}", err),
        format!("Cannot enqueue user 'User1' for book 'Книга1' with id '{id}', which user holds")
    );
}

#[test]
fn test_return_errors_name_the_holder() {
    let id = BookId::new();
    let err = InvalidOperation::NotHolder {
        user: "bob".into(),
        holder: "alice".into(),
        book_id: id,
    };
    assert_eq!(
        format!("{}", err),
        format!("Cannot return book with id '{id}': held by 'alice', not 'bob'")
    );

    let err = InvalidOperation::NotCheckedOut { book_id: id };
    assert_eq!(
        format!("{}", err),
        format!("Cannot return book with id '{id}': it is not checked out")
    );
}

#[test]
fn test_kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ErrorKind::InvalidOperation).unwrap(),
        "\"invalid_operation\""
    );
    assert_eq!(serde_json::to_string(&ErrorKind::NotFound).unwrap(), "\"not_found\"");
}
