//! Shared helpers for document assembly.

use chrono::Local;

/// Format today's date for letter headers (e.g., "24-Aug-2026").
pub fn format_letter_date() -> String {
    Local::now().format("%d-%b-%Y").to_string()
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}
