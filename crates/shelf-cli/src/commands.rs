// Rust guideline compliant 2026-10-16

//! Command implementations for the Shelf CLI.

pub mod add;
pub mod init;
pub mod issue;
pub mod list;
pub mod return_book;
pub mod search;

use crate::terminal::print_warning;
use shelf_core::{Config, Error, InventoryStore};
use termcolor::ColorChoice;

/// Opens the inventory named by the configuration and loads it.
///
/// A load failure is reported once as a warning; the store keeps whatever
/// was read before the failure.
///
/// # Errors
///
/// Returns an error only if the configured path is unusable.
pub fn open_store(config: &Config, choice: ColorChoice) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new(&config.data_file, config.record_format)?;

    match store.load() {
        Ok(_) => {}
        Err(e @ Error::LoadFailure { .. }) => print_warning(choice, &e.to_string()),
        Err(e) => return Err(e.into()),
    }

    Ok(store)
}

/// Opens and loads the inventory for a command that will save it.
///
/// Unlike [`open_store`], a load failure is fatal here: saving the partial
/// store would drop every record after the unreadable line.
///
/// # Errors
///
/// Returns an error if the configured path is unusable or the file cannot be
/// read completely.
pub fn open_store_for_update(config: &Config) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new(&config.data_file, config.record_format)?;
    store.load()?;
    Ok(store)
}
