// Rust guideline compliant 2026-10-16

//! Core data models for Shelf.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Circulation status of a Book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Book is on the shelf.
    #[default]
    Available,
    /// Book is checked out.
    Issued,
}

impl Status {
    /// Returns the persisted spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Issued => "issued",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "available" => Ok(Status::Available),
            "issued" => Ok(Status::Issued),
            other => Err(crate::Error::InvalidBook(format!(
                "Unknown status '{}', expected available or issued",
                other
            ))),
        }
    }
}

/// A single book in the inventory.
///
/// Fields are read-only once constructed; the status changes only through
/// [`Book::issue`] and [`Book::return_item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    #[serde(default)]
    status: Status,
}

impl Book {
    /// Creates a new available Book.
    ///
    /// # Arguments
    ///
    /// * `title` - The book title
    /// * `author` - The author name
    /// * `isbn` - Opaque identifier, not required to be unique
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::with_status(title, author, isbn, Status::Available)
    }

    /// Creates a Book with an explicit initial status.
    pub fn with_status(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status,
        }
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the ISBN.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if the book is on the shelf.
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// Validates the Book data.
    ///
    /// # Errors
    ///
    /// Returns an error if any field contains a line break, which would
    /// split the record across lines in the backing file.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("isbn", &self.isbn),
        ] {
            if value.contains(['\n', '\r']) {
                return Err(crate::Error::InvalidBook(format!(
                    "{} cannot contain line breaks",
                    name
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) by {} - {}",
            self.title, self.isbn, self.author, self.status
        )
    }
}
