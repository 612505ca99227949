// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the Shelf CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used on stderr.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

/// Resolves the color choice for status messages.
///
/// # Arguments
/// * `no_color` - Whether the user disabled color explicitly
pub fn color_choice(no_color: bool) -> ColorChoice {
    if !no_color && should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a status message with a colored prefix to stderr.
pub fn print_status(choice: ColorChoice, prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an error message.
pub fn print_error(choice: ColorChoice, message: &str) {
    print_status(choice, "✗", Color::Red, message);
}

/// Prints a warning message.
pub fn print_warning(choice: ColorChoice, message: &str) {
    print_status(choice, "⚠", Color::Yellow, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_respects_flag() {
        assert_eq!(color_choice(true), ColorChoice::Never);
    }
}
