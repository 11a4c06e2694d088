//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all vcs-overlay output,
//! ensuring consistent colors, spacing, and message structure across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, per-status colors
//!   for badges
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **User-friendly formatting**: Clear visual hierarchy and readable output

use crate::core::status::VcsStatus;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
///
/// # Colors
/// - Checkmark in green, message in white
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Format a status badge as a fixed-width colored cell.
///
/// `None` renders as blank space of the same width so tree columns stay aligned
/// when badges are suppressed.
pub fn format_badge(status: Option<VcsStatus>) -> String {
    match status {
        Some(status) => format!("{:<2}", status.badge()).color(status.color()).to_string(),
        None => "  ".to_string(),
    }
}
