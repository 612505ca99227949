// Rust guideline compliant 2026-10-16

//! Implementation of the `shelf add` command.

use crate::OutputFormatter;
use anyhow::Result;
use shelf_core::{Book, InventoryStore};
use std::io::Write;

/// Validates and appends a new available Book, then saves the inventory.
///
/// # Errors
///
/// Returns an error if:
/// - A field contains a line break
/// - The inventory cannot be saved
pub fn execute(
    store: &mut InventoryStore,
    title: String,
    author: String,
    isbn: String,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let book = Book::new(title, author, isbn);
    book.validate()?;

    store.add(book.clone());
    store.save()?;

    writeln!(out, "{}", formatter.format_action("added", &book))?;
    Ok(())
}
