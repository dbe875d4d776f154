//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically; the `color`
//! setting can switch colors off entirely.

use colored::Colorize;

/// Apply the `color` setting; `false` disables colors regardless of the terminal.
pub fn configure(color: bool) {
    if !color {
        colored::control::set_override(false);
    }
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print a decoded message (red when it is an error sentinel)
pub fn decoded(msg: &str, failed: bool) {
    if failed {
        println!("{}", msg.red());
    } else {
        println!("{}", msg);
    }
}

/// Print a table row: bold key, plain value
pub fn row(key: &(impl std::fmt::Display + ?Sized), value: &(impl std::fmt::Display + ?Sized)) {
    println!("{}  {}", key.to_string().bold(), value);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
