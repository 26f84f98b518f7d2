//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Styled error line, optionally tagged with the offending field.
#[must_use]
pub fn error_line(field: Option<&str>, text: &str) -> String {
    let label = if is_color_disabled() {
        "[ERROR]".to_string()
    } else {
        style("[ERROR]").red().bold().to_string()
    };
    match field {
        Some(field) => format!("{label} {field}: {text}"),
        None => format!("{label} {text}"),
    }
}

/// Print an error message to stderr.
pub fn print_error(field: Option<&str>, text: &str) {
    eprintln!("{}", error_line(field, text));
}
