// Rust guideline compliant 2026-10-16

//! Implementation of the `shelf search` command.

use crate::OutputFormatter;
use anyhow::Result;
use shelf_core::InventoryStore;
use std::io::Write;

/// What to search on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Case-insensitive title substring.
    Title(String),
    /// Exact ISBN.
    Isbn(String),
}

/// Prints every Book matching the query, in store order.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn execute(
    store: &InventoryStore,
    query: &Query,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let books = match query {
        Query::Title(needle) => store.search_by_title(needle),
        Query::Isbn(isbn) => store.search_by_isbn(isbn),
    };

    writeln!(out, "{}", formatter.format_list(&books))?;
    Ok(())
}
