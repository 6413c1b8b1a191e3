//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build styled lines and are testable; the `display_*`
//! functions print them to stderr.

use crate::boundary::BoundaryWarning;
use console::style;

/// Styled error line: red `Error:` label followed by the message.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("Error:").red().bold(), message)
}

/// Styled warning line: yellow `Warning:` label followed by the message.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("Warning:").yellow(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{}", format_warning(message));
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    display_warning(&warning.to_string());
}
