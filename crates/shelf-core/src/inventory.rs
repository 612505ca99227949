// Rust guideline compliant 2026-10-16

//! In-memory inventory of Books backed by a single flat file.
//!
//! The store is an ordered `Vec<Book>`: insertion order is display order and
//! first-match order. Every lookup is a linear scan.

use crate::{Action, Book, Error, RecordFormat, Result, Storage};
use std::path::{Path, PathBuf};

/// Outcome of a successful [`InventoryStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Records appended to the store.
    pub loaded: usize,
    /// Lines dropped because they did not decode.
    pub skipped: usize,
}

/// Ordered collection of Books bound to one backing file.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    books: Vec<Book>,
    storage: Storage,
}

impl InventoryStore {
    /// Creates an empty store bound to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: impl Into<PathBuf>, format: RecordFormat) -> Result<Self> {
        Ok(Self {
            books: Vec::new(),
            storage: Storage::new(path.into(), format)?,
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Returns the record format used for load and save.
    pub fn format(&self) -> RecordFormat {
        self.storage.format()
    }

    /// Appends a Book. Duplicate ISBNs are allowed.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Returns every Book whose ISBN equals `isbn`, in store order.
    pub fn search_by_isbn(&self, isbn: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.isbn() == isbn).collect()
    }

    /// Returns every Book whose title contains `needle`, ignoring case.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Book> {
        let needle = needle.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title().to_lowercase().contains(&needle))
            .collect()
    }

    /// Returns all Books in store order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of Books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the store holds no Books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Issues the first Book whose ISBN equals `isbn`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Book matches, `AlreadyIssued` if the first
    /// match is already out.
    pub fn issue(&mut self, isbn: &str) -> Result<&Book> {
        self.apply_first(isbn, Action::Issue)
    }

    /// Returns the first Book whose ISBN equals `isbn`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Book matches, `NotIssued` if the first match
    /// is on the shelf.
    pub fn return_item(&mut self, isbn: &str) -> Result<&Book> {
        self.apply_first(isbn, Action::Return)
    }

    fn apply_first(&mut self, isbn: &str, action: Action) -> Result<&Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.isbn() == isbn)
            .ok_or_else(|| Error::NotFound(isbn.to_string()))?;
        book.apply(action)?;
        Ok(&*book)
    }

    /// Loads records from the backing file and appends them to the store.
    ///
    /// A missing file is not an error. Malformed lines are dropped and only
    /// counted.
    ///
    /// # Errors
    ///
    /// Returns `LoadFailure` if reading fails part-way; Books read before the
    /// failure stay in the store.
    pub fn load(&mut self) -> Result<LoadSummary> {
        let before = self.books.len();
        let skipped = self
            .storage
            .read_into(&mut self.books)
            .map_err(|source| Error::LoadFailure {
                path: self.storage.path().to_path_buf(),
                source,
            })?;

        let summary = LoadSummary {
            loaded: self.books.len() - before,
            skipped,
        };
        tracing::debug!(
            path = %self.storage.path().display(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "inventory loaded"
        );
        Ok(summary)
    }

    /// Overwrites the backing file with the current Books in store order.
    ///
    /// # Errors
    ///
    /// Returns `SaveFailure` on any IO error; a partial write is not undone.
    pub fn save(&self) -> Result<()> {
        self.storage
            .write_all(&self.books)
            .map_err(|source| Error::SaveFailure {
                path: self.storage.path().to_path_buf(),
                source,
            })?;
        tracing::debug!(
            path = %self.storage.path().display(),
            count = self.books.len(),
            "inventory saved"
        );
        Ok(())
    }
}
