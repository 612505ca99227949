// Rust guideline compliant 2026-10-16

//! Implementation of the `shelf issue` command.

use crate::OutputFormatter;
use anyhow::Result;
use shelf_core::InventoryStore;
use std::io::Write;

/// Issues the first Book with the given ISBN and saves the inventory.
///
/// # Errors
///
/// Returns an error if no Book matches, the Book is already issued, or the
/// inventory cannot be saved.
pub fn execute(
    store: &mut InventoryStore,
    isbn: &str,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let book = store.issue(isbn)?.clone();
    store.save()?;

    writeln!(out, "{}", formatter.format_action("issued", &book))?;
    Ok(())
}
