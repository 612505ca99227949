// Rust guideline compliant 2026-10-16

//! Implementation of the `shelf init` command.
//!
//! Writes the default `shelf.toml` and creates an empty data file, leaving
//! existing files untouched.

use anyhow::Result;
use shelf_core::{config::CONFIG_FILE, Config};
use std::io::Write;
use std::path::Path;

/// Initializes a Shelf inventory in `dir`.
///
/// # Errors
///
/// Returns an error if the config or data file cannot be written.
pub fn execute(dir: &Path, config: &Config, out: &mut dyn Write) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        writeln!(out, "Config already exists: {}", config_path.display())?;
    } else {
        config.save(dir)?;
        writeln!(out, "✓ Wrote {}", config_path.display())?;
    }

    let data_path = dir.join(&config.data_file);
    if data_path.exists() {
        writeln!(out, "Data file already exists: {}", data_path.display())?;
    } else {
        std::fs::File::create(&data_path)?;
        writeln!(out, "✓ Created {}", data_path.display())?;
    }

    Ok(())
}
