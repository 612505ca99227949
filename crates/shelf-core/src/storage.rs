// Rust guideline compliant 2026-10-16

//! Storage module for the line-oriented backing file.
//!
//! Reads stream the file line by line and append decoded Books to a caller
//! supplied buffer, so that a read error part-way through leaves every record
//! seen so far in place. Writes truncate the file and rewrite it in order;
//! there is no temp file and no rollback.

use crate::{Book, Error, RecordFormat, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Storage engine for Books.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the backing file.
    path: PathBuf,
    /// Line codec in use.
    format: RecordFormat,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf, format: RecordFormat) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path, format })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the record format.
    pub fn format(&self) -> RecordFormat {
        self.format
    }
}

impl Storage {
    /// Reads every decodable record and appends it to `books`.
    ///
    /// A missing file is treated as an empty one. Lines that fail to decode
    /// are skipped.
    ///
    /// # Returns
    ///
    /// The number of skipped lines.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened or a line cannot be
    /// read. Books decoded before the failure remain in `books`.
    pub fn read_into(&self, books: &mut Vec<Book>) -> std::io::Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut skipped = 0;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.format.decode(&line) {
                Some(book) => books.push(book),
                None => skipped += 1,
            }
        }

        Ok(skipped)
    }

    /// Overwrites the backing file with one line per Book, in order.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be created or written. A
    /// partially written file is left as-is.
    pub fn write_all(&self, books: &[Book]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);

        for book in books {
            if self.format.is_lossy(book) {
                tracing::warn!(
                    isbn = book.isbn(),
                    format = %self.format,
                    "record will not round-trip in this format"
                );
            }
            let line = self.format.encode(book).map_err(|e| match e {
                Error::Json(json) => std::io::Error::from(json),
                other => std::io::Error::other(other.to_string()),
            })?;
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        writer.flush()
    }
}
