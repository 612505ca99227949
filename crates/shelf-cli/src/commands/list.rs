// Rust guideline compliant 2026-10-16

//! Implementation of the `shelf list` command.

use crate::OutputFormatter;
use anyhow::Result;
use shelf_core::{Book, InventoryStore, Status};
use std::io::Write;

/// Lists Books in store order, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the status filter is unknown or output fails.
pub fn execute(
    store: &InventoryStore,
    status_filter: Option<String>,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let status_filter: Option<Status> = status_filter.map(|s| s.parse()).transpose()?;

    let books: Vec<&Book> = store
        .list_all()
        .iter()
        .filter(|b| status_filter.map_or(true, |status| b.status() == status))
        .collect();

    writeln!(out, "{}", formatter.format_list(&books))?;
    Ok(())
}
