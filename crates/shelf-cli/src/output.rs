// Rust guideline compliant 2026-10-16

//! Output formatting module for the Shelf CLI.
//!
//! This module provides functionality for formatting Books
//! in various output formats (JSON, table, plain text).

use serde_json::json;
use shelf_core::{Book, OutputFormat};
use tabled::{builder::Builder, settings::Style};

/// Shown by the human-readable formatters for an empty list.
const NO_BOOKS: &str = "No books found.";

/// Output formatter trait.
///
/// Defines the interface for formatting inventory data in different output formats.
pub trait OutputFormatter {
    /// Formats a list of Books for display.
    fn format_list(&self, books: &[&Book]) -> String;

    /// Formats the outcome of an action (added, issued, returned) on a Book.
    ///
    /// # Arguments
    /// * `action` - Past-tense verb naming what happened
    /// * `book` - The Book after the action
    fn format_action(&self, action: &str, book: &Book) -> String;

    /// Formats an error for display.
    ///
    /// # Arguments
    /// * `code` - Stable error code
    /// * `message` - Human-readable message
    fn format_error(&self, code: &str, message: &str) -> String;
}

/// JSON output formatter.
///
/// Formats Books as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_list(&self, books: &[&Book]) -> String {
        let output = json!({
            "books": books,
            "total": books.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize Book list" }).to_string())
    }

    fn format_action(&self, action: &str, book: &Book) -> String {
        json!({ "action": action, "book": book }).to_string()
    }

    fn format_error(&self, code: &str, message: &str) -> String {
        json!({ "error": { "code": code, "message": message } }).to_string()
    }
}

/// Table output formatter.
///
/// Formats Books as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_list(&self, books: &[&Book]) -> String {
        if books.is_empty() {
            return NO_BOOKS.to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Title", "Author", "ISBN", "Status"]);

        for book in books {
            builder.push_record(vec![
                book.title(),
                book.author(),
                book.isbn(),
                book.status().as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_action(&self, action: &str, book: &Book) -> String {
        let mut verb = action.to_string();
        if let Some(first) = verb.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        format!("✓ {}: {}", verb, book)
    }

    fn format_error(&self, _code: &str, message: &str) -> String {
        format!("Error: {}", message)
    }
}

/// Plain text output formatter.
///
/// One line per Book, in the same shape the interactive menu prints.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_list(&self, books: &[&Book]) -> String {
        if books.is_empty() {
            return NO_BOOKS.to_string();
        }

        books
            .iter()
            .map(|book| book.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_action(&self, action: &str, book: &Book) -> String {
        format!("{} {}", action, book.isbn())
    }

    fn format_error(&self, _code: &str, message: &str) -> String {
        format!("Error: {}", message)
    }
}

/// Factory function to create an appropriate formatter.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
