// Rust guideline compliant 2026-10-16

//! Property-based tests for the FSM module.

use proptest::prelude::*;
use shelf_core::{Action, Book, Error, Status};

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Available), Just(Status::Issued)]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Issue), Just(Action::Return)]
}

proptest! {
    /// Issuing twice in a row always fails the second time and leaves the book issued.
    #[test]
    fn prop_double_issue_rejected(status in arb_status()) {
        let mut book = Book::with_status("T", "A", "X", status);
        let _ = book.issue();
        let second = book.issue();
        let rejected = matches!(second, Err(Error::AlreadyIssued { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(book.status(), Status::Issued);
    }

    /// An action succeeds exactly when the status allows it, and a failed
    /// action never changes the status.
    #[test]
    fn prop_apply_matches_can_apply(status in arb_status(), action in arb_action()) {
        let mut book = Book::with_status("T", "A", "X", status);
        let allowed = status.can_apply(action);
        let result = book.apply(action);

        prop_assert_eq!(result.is_ok(), allowed);
        if allowed {
            prop_assert_eq!(book.status(), action.target());
        } else {
            prop_assert_eq!(book.status(), status);
        }
    }

    /// Any sequence of actions keeps the status equal to a replay of the
    /// legal ones.
    #[test]
    fn prop_action_sequences(actions in prop::collection::vec(arb_action(), 0..32)) {
        let mut book = Book::new("T", "A", "X");
        let mut expected = Status::Available;

        for action in actions {
            let ok = book.apply(action).is_ok();
            if expected.can_apply(action) {
                prop_assert!(ok);
                expected = action.target();
            } else {
                prop_assert!(!ok);
            }
            prop_assert_eq!(book.status(), expected);
        }
    }
}
