// Rust guideline compliant 2026-10-16

//! Line codecs for persisting Books.
//!
//! Two formats are supported:
//!
//! - `pipe`: `<title> | <author> | <isbn> | <status>`, no header, no escaping.
//!   A field that contains the delimiter does not survive a round trip.
//! - `jsonl`: one JSON object per line, safe for any field content.

use crate::{Book, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field separator used by the pipe format.
pub const DELIMITER: &str = " | ";

/// Number of fields in a pipe record.
const FIELD_COUNT: usize = 4;

/// On-disk encoding of a Book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordFormat {
    /// Legacy `" | "`-delimited line.
    #[default]
    Pipe,
    /// One JSON object per line.
    Jsonl,
}

impl RecordFormat {
    /// Encodes a Book as a single line without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn encode(&self, book: &Book) -> crate::Result<String> {
        match self {
            RecordFormat::Pipe => Ok(encode_pipe(book)),
            RecordFormat::Jsonl => Ok(serde_json::to_string(book)?),
        }
    }

    /// Decodes one line into a Book.
    ///
    /// Returns `None` for lines that do not form a complete record; callers
    /// skip those.
    pub fn decode(&self, line: &str) -> Option<Book> {
        let line = line.trim();
        match self {
            RecordFormat::Pipe => decode_pipe(line),
            RecordFormat::Jsonl => serde_json::from_str(line).ok(),
        }
    }

    /// Returns true if the Book would not survive a round trip in this format.
    pub fn is_lossy(&self, book: &Book) -> bool {
        match self {
            RecordFormat::Pipe => decode_pipe(encode_pipe(book).trim()).as_ref() != Some(book),
            RecordFormat::Jsonl => false,
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Pipe => f.write_str("pipe"),
            RecordFormat::Jsonl => f.write_str("jsonl"),
        }
    }
}

impl FromStr for RecordFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "pipe" => Ok(RecordFormat::Pipe),
            "jsonl" => Ok(RecordFormat::Jsonl),
            other => Err(crate::Error::InvalidConfig(format!(
                "record format must be pipe or jsonl, got '{}'",
                other
            ))),
        }
    }
}

fn encode_pipe(book: &Book) -> String {
    [book.title(), book.author(), book.isbn(), book.status().as_str()].join(DELIMITER)
}

fn decode_pipe(line: &str) -> Option<Book> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }
    let status: Status = parts[3].parse().ok()?;
    Some(Book::with_status(parts[0], parts[1], parts[2], status))
}
