//! User interface module - terminal styling and message output.
//!
//! Command results go to stdout untouched; everything produced here is a
//! diagnostic and goes to stderr.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_warning, format_error, format_warning,
};

/// Enables or disables colored output on both streams.
///
/// Colors stay off when stderr is not a terminal, whatever `enabled` says.
pub fn configure_colors(enabled: bool) {
    let enabled = enabled && console::Term::stderr().features().colors_supported();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}
