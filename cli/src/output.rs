//! Terminal output utilities for styled CLI output.
//!
//! Status lines go through [`Output`] instead of `println!`. When a command
//! writes image bytes to stdout, use [`Output::stderr`] so the messages do
//! not end up inside the PNG.

use std::fmt::Display;

use console::{Term, style};

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }

    /// Create an output helper writing to stderr.
    pub fn stderr() -> Self {
        Self { term: Term::stderr() }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(self.term.write_line(&format!("{} {}", style("✓").green().bold(), message)));
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&self, message: impl Display) {
        drop(self.term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message)));
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print a header with emphasis.
    pub fn header(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).bold().cyan().to_string()));
    }

    /// Print a labeled value with indentation.
    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        drop(self.term.write_line(&format!("{spaces}{}: {}", style(label).dim(), value)));
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }
}
