// Rust guideline compliant 2026-10-16

//! Interactive menu loop.
//!
//! Runs when `shelf` is started without a subcommand. Input and output are
//! generic so the loop can be driven from a script in tests. End of input is
//! handled like choosing Exit: the inventory is saved and the loop ends.

use crate::terminal::print_warning;
use shelf_core::{Book, Error, InventoryStore};
use std::io::{self, BufRead, Write};
use termcolor::ColorChoice;

const MENU: &str = "\n--- Library Menu ---\n\
1. Add Book\n\
2. Issue Book\n\
3. Return Book\n\
4. View All Books\n\
5. Search Book\n\
6. Exit";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `1`: read a title, author and ISBN and add the Book.
    Add,
    /// `2`: issue the first Book with an ISBN.
    Issue,
    /// `3`: return the first Book with an ISBN.
    Return,
    /// `4`: print every Book.
    ViewAll,
    /// `5`: search titles by substring.
    Search,
    /// `6`: save and leave.
    Exit,
}

impl Choice {
    /// Parses a menu selection, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Issue),
            "3" => Some(Choice::Return),
            "4" => Some(Choice::ViewAll),
            "5" => Some(Choice::Search),
            "6" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user exits or input ends.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Inventory
/// errors are printed and the loop continues. A failed save on exit is a
/// warning on stderr.
pub fn run<R: BufRead, W: Write + ?Sized>(
    store: &mut InventoryStore,
    mut input: R,
    out: &mut W,
    choice: ColorChoice,
) -> io::Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(line) = prompt(&mut input, out, "Choose: ")? else {
            return exit(store, out, choice);
        };

        match Choice::parse(&line) {
            Some(Choice::Add) => {
                let Some(book) = read_book(&mut input, out)? else {
                    return exit(store, out, choice);
                };
                store.add(book);
                writeln!(out, "Book added.")?;
            }
            Some(Choice::Issue) => {
                let Some(isbn) = prompt(&mut input, out, "ISBN: ")? else {
                    return exit(store, out, choice);
                };
                report(out, store.issue(&isbn).map(|_| ()), "Issued.")?;
            }
            Some(Choice::Return) => {
                let Some(isbn) = prompt(&mut input, out, "ISBN: ")? else {
                    return exit(store, out, choice);
                };
                report(out, store.return_item(&isbn).map(|_| ()), "Returned.")?;
            }
            Some(Choice::ViewAll) => {
                if store.is_empty() {
                    writeln!(out, "No books in library yet.")?;
                } else {
                    for book in store.list_all() {
                        writeln!(out, "{}", book)?;
                    }
                }
            }
            Some(Choice::Search) => {
                let Some(title) = prompt(&mut input, out, "Title: ")? else {
                    return exit(store, out, choice);
                };
                let results = store.search_by_title(&title);
                if results.is_empty() {
                    writeln!(out, "No match.")?;
                } else {
                    for book in results {
                        writeln!(out, "{}", book)?;
                    }
                }
            }
            Some(Choice::Exit) => return exit(store, out, choice),
            None => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Writes a prompt and reads one line with its line ending stripped.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn read_book<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Book>> {
    let Some(title) = prompt(input, out, "Title: ")? else {
        return Ok(None);
    };
    let Some(author) = prompt(input, out, "Author: ")? else {
        return Ok(None);
    };
    let Some(isbn) = prompt(input, out, "ISBN: ")? else {
        return Ok(None);
    };
    Ok(Some(Book::new(title, author, isbn)))
}

fn report<W: Write + ?Sized>(
    out: &mut W,
    result: shelf_core::Result<()>,
    success: &str,
) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "{}", success),
        Err(Error::NotFound(_)) => writeln!(out, "Not found."),
        Err(e) => writeln!(out, "{}", e),
    }
}

fn exit<W: Write + ?Sized>(
    store: &InventoryStore,
    out: &mut W,
    choice: ColorChoice,
) -> io::Result<()> {
    match store.save() {
        Ok(()) => writeln!(out, "Saved. Goodbye!"),
        Err(e) => {
            print_warning(choice, &e.to_string());
            writeln!(out, "Goodbye!")
        }
    }
}
