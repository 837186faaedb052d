//! Terminal presentation helpers

use colored::Colorize;
use std::io::{self, Write};

/// Indentation used under section titles.
pub const INDENT: usize = 4;

/// Write a bold section title.
pub fn title(out: &mut dyn Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.bold())
}

/// Indent every line of `text`.
pub fn indent(text: &str) -> String {
    indent_by(text, INDENT)
}

fn indent_by(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
