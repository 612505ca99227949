// Rust guideline compliant 2026-10-16

//! Property-based tests for save/load fidelity.

use proptest::prelude::*;
use shelf_core::{Book, InventoryStore, RecordFormat, Status};
use tempfile::TempDir;

/// Field text that the pipe format can carry: no delimiter, no line breaks,
/// no surrounding whitespace, never empty.
fn arb_pipe_field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,'-]{0,20}[A-Za-z0-9]"
}

/// Arbitrary printable text for the JSONL format.
fn arb_any_field() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Available), Just(Status::Issued)]
}

fn arb_books(field: BoxedStrategy<String>) -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(
        (field.clone(), field.clone(), field, arb_status())
            .prop_map(|(t, a, i, s)| Book::with_status(t, a, i, s)),
        0..16,
    )
}

fn round_trip(books: &[Book], format: RecordFormat) -> Vec<Book> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("books");

    let mut store = InventoryStore::new(&path, format).unwrap();
    for book in books {
        store.add(book.clone());
    }
    store.save().unwrap();

    let mut fresh = InventoryStore::new(&path, format).unwrap();
    fresh.load().unwrap();
    fresh.list_all().to_vec()
}

proptest! {
    /// Saving and loading a delimiter-free dataset reproduces the same
    /// ordered records.
    #[test]
    fn prop_pipe_round_trip(books in arb_books(arb_pipe_field().boxed())) {
        prop_assert_eq!(round_trip(&books, RecordFormat::Pipe), books);
    }

    /// JSONL carries any field content.
    #[test]
    fn prop_jsonl_round_trip(books in arb_books(arb_any_field().boxed())) {
        prop_assert_eq!(round_trip(&books, RecordFormat::Jsonl), books);
    }
}
