//! Terminal output helpers.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Prints an info line with the label colored.
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

pub fn print_success(message: &str) {
    println!("{} {}", "[OK]".green(), message);
}

pub fn print_failure(message: &str) {
    println!("{} {}", "[FAIL]".red().bold(), message);
}

/// Prints an error to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bright_red().bold(), message);
}
