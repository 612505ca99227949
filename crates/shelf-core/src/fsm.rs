// Rust guideline compliant 2026-10-16

//! Finite State Machine module for circulation transitions.
//!
//! A Book has two states and two actions:
//!
//! - Available → Issued (issue)
//! - Issued → Available (return)
//!
//! Applying an action from the wrong state is an error and leaves the
//! status unchanged.

use crate::{Book, Error, Result, Status};

/// A circulation action that moves a Book between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Check the book out.
    Issue,
    /// Bring the book back.
    Return,
}

impl Action {
    /// Returns the status a book must be in for this action to apply.
    pub fn source(self) -> Status {
        match self {
            Action::Issue => Status::Available,
            Action::Return => Status::Issued,
        }
    }

    /// Returns the status a book ends up in after this action.
    pub fn target(self) -> Status {
        match self {
            Action::Issue => Status::Issued,
            Action::Return => Status::Available,
        }
    }
}

impl Status {
    /// Checks whether the action may be applied from this status.
    pub fn can_apply(&self, action: Action) -> bool {
        *self == action.source()
    }

    /// Returns the actions that are legal from this status.
    pub fn valid_actions(&self) -> Vec<Action> {
        [Action::Issue, Action::Return]
            .into_iter()
            .filter(|action| self.can_apply(*action))
            .collect()
    }
}

impl Book {
    /// Applies a circulation action to the book.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyIssued` when issuing an issued book and `NotIssued`
    /// when returning an available one. The status is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        if !self.status().can_apply(action) {
            let isbn = self.isbn().to_string();
            return Err(match action {
                Action::Issue => Error::AlreadyIssued { isbn },
                Action::Return => Error::NotIssued { isbn },
            });
        }
        self.set_status(action.target());
        Ok(())
    }

    /// Issues the book.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyIssued` if the book is already out.
    pub fn issue(&mut self) -> Result<()> {
        self.apply(Action::Issue)
    }

    /// Returns the book to the shelf.
    ///
    /// # Errors
    ///
    /// Returns `NotIssued` if the book is already available.
    pub fn return_item(&mut self) -> Result<()> {
        self.apply(Action::Return)
    }
}
