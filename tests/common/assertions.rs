//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating vcs-overlay command output: badge
//! columns in the status tree, refusal messages, and settings listings.

#![allow(dead_code)]

use predicates::prelude::*;

/// Matches a tree line carrying `badge` followed by `name`.
///
/// Anchored at line start so the one-character badges cannot match inside
/// the two-character conflict badge.
pub fn has_badge(badge: &str, name: &str) -> impl Predicate<str> {
    let pattern = format!(r"(?m)^\s*{}\s+{}", escape(badge), escape(name));
    predicates::str::is_match(pattern).unwrap()
}

/// Matches a tree line for `name` with no badge in front of it
pub fn has_no_badge(name: &str) -> impl Predicate<str> {
    let pattern = format!(r"(?m)^\s+{}", escape(name));
    predicates::str::is_match(pattern).unwrap()
}

/// Creates a predicate that checks for the failed-refresh notice
pub fn status_unavailable() -> impl Predicate<str> {
    predicates::str::contains("Status unavailable")
}

/// Creates a predicate that checks for an action refusal message
pub fn action_refused() -> impl Predicate<str> {
    predicates::str::contains("is not available")
}

/// Creates a predicate that checks for one settings listing line
pub fn has_setting(name: &str, value: &str) -> impl Predicate<str> {
    let pattern = format!(r"(?m){}:\s+{}", escape(name), escape(value));
    predicates::str::is_match(pattern).unwrap()
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '?' | '+' | '*' | '.' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
                format!("\\{c}")
            }
            _ => c.to_string(),
        })
        .collect()
}
