//! Shared UI utilities for consistent terminal output.

use colored::Colorize;

/// Standard symbols used throughout the CLI for consistent visual language.
pub mod symbols {
    /// Arrow for action/progress indicators
    pub const ARROW: &str = "→";
    /// Checkmark for success
    pub const SUCCESS: &str = "✓";
    /// X mark for failure
    pub const FAILURE: &str = "✗";
    /// Warning/attention indicator
    pub const WARNING: &str = "!";
    /// Bullet point
    pub const BULLET: &str = "•";
}

/// Print a step header with the action arrow.
pub fn print_step(message: &str) {
    println!("{} {}", symbols::ARROW.blue().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", symbols::SUCCESS.green().bold(), message);
}

pub fn print_error(message: &str) {
    println!("{} {}", symbols::FAILURE.red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", symbols::WARNING.yellow().bold(), message);
}

/// Print a bulleted, indented key/value line.
pub fn print_field(key: &str, value: &str) {
    println!("  {} {}: {}", symbols::BULLET.dimmed(), key, value.bold());
}

