//! Tests for the command API

use lending_library::core::{BookLibrary, ErrorKind, LendingState};
use lending_library::infra::InMemoryLibrary;
use lending_library::runtime::api::{health, list_books};
use lending_library::runtime::{execute_command, execute_script, CommandResponse, LibraryCommand};

fn add(library: &InMemoryLibrary, title: &str) -> lending_library::util::BookId {
    match execute_command(library, LibraryCommand::AddBook { title: title.into() }) {
        CommandResponse::Added { book_id } => book_id,
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn test_command_wire_format() {
    let cmd: LibraryCommand = serde_json::from_str(r#"{"op":"add_book","title":"Книга1"}"#).unwrap();
    assert_eq!(cmd, LibraryCommand::AddBook { title: "Книга1".into() });

    let json = serde_json::to_value(CommandResponse::Done).unwrap();
    assert_eq!(json, serde_json::json!({"status": "done"}));
}

#[test]
fn test_execute_commands() {
    let library = InMemoryLibrary::new();
    let book_id = add(&library, "Книга1");

    let resp = execute_command(&library, LibraryCommand::Enqueue { book_id, user: "User1".into() });
    assert!(matches!(
        resp,
        CommandResponse::Error { kind: ErrorKind::InvalidOperation, ref message }
            if message.contains("Checkout book instead")
    ));

    let resp = execute_command(&library, LibraryCommand::Checkout { book_id, user: "User0".into() });
    assert_eq!(resp, CommandResponse::Done);

    match execute_command(&library, LibraryCommand::GetBook { book_id }) {
        CommandResponse::Book { book } => {
            assert_eq!(book.holder.as_deref(), Some("User0"));
            assert_eq!(book.state(), LendingState::Held);
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn test_unknown_book_reports_not_found() {
    let library = InMemoryLibrary::new();
    let book_id = lending_library::util::BookId::new();
    let resp = execute_command(&library, LibraryCommand::Return { book_id, user: "x".into() });
    assert!(matches!(resp, CommandResponse::Error { kind: ErrorKind::NotFound, .. }));
}

#[test]
fn test_execute_script_continues_after_rejection() {
    let library = InMemoryLibrary::new();
    let id = add(&library, "Книга1");
    let script = format!(
        r#"[
            {{"op":"checkout","book_id":"{id}","user":"User0"}},
            {{"op":"enqueue","book_id":"{id}","user":"User1"}},
            {{"op":"enqueue","book_id":"{id}","user":"User1"}},
            {{"op":"return","book_id":"{id}","user":"User0"}},
            {{"op":"get_book","book_id":"{id}"}}
        ]"#
    );

    let responses = execute_script(&library, &script).unwrap();
    assert_eq!(responses.len(), 5);
    assert_eq!(responses[0], CommandResponse::Done);
    assert_eq!(responses[1], CommandResponse::Done);
    assert!(matches!(responses[2], CommandResponse::Error { kind: ErrorKind::InvalidOperation, .. }));
    assert_eq!(responses[3], CommandResponse::Done);
    match &responses[4] {
        CommandResponse::Book { book } => {
            assert_eq!(book.holder.as_deref(), Some("User1"));
            assert!(book.queue.is_empty());
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn test_execute_script_rejects_malformed_input() {
    let library = InMemoryLibrary::new();
    assert!(execute_script(&library, r#"[{"op":"burn"}]"#).is_err());
    assert!(library.is_empty());
}

#[test]
fn test_list_books_in_registration_order() {
    let library = InMemoryLibrary::new();
    let a = add(&library, "A");
    let b = add(&library, "B");
    library.checkout_book(b, "User0").unwrap();

    let books = list_books(&library);
    assert_eq!(books.iter().map(|s| s.id).collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(books[1].holder.as_deref(), Some("User0"));
}

#[test]
fn test_health() {
    assert!(health().ok);
}
