//! Type-safe working-copy status enumeration.
//!
//! This module defines [`VcsStatus`] which replaces the raw status letters printed by
//! console VCS clients with a proper enumeration. Every supported client reports the
//! same six states, only the letters differ per client (see [`crate::core::vcs`]).
//!
//! # Public API
//! - [`VcsStatus`]: Main enumeration for all working-copy states
//!
//! # Key Features
//! - **Type safety**: Compile-time checking instead of raw status letters
//! - **Badge formatting**: Consistent one-glyph representation for tree output
//! - **Color mapping**: Per-status terminal color for overlay rendering

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Working-copy status of a single tracked path.
///
/// The variant order is load-bearing: per-client classification tables in
/// [`crate::core::vcs`] are indexed by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcsStatus {
    /// Tracked and unchanged
    Normal,
    /// Not under version control
    Unmanaged,
    /// Tracked with local modifications
    Modified,
    /// Scheduled for addition
    Added,
    /// In a conflicted state
    Conflicted,
    /// Scheduled for deletion
    Deleted,
}

/// All statuses in classification-table order.
pub const STATUS_ORDER: [VcsStatus; 6] = [
    VcsStatus::Normal,
    VcsStatus::Unmanaged,
    VcsStatus::Modified,
    VcsStatus::Added,
    VcsStatus::Conflicted,
    VcsStatus::Deleted,
];

impl VcsStatus {
    /// Get the badge glyph shown next to a path in the tree view
    pub fn badge(&self) -> &'static str {
        match self {
            VcsStatus::Normal => "o",
            VcsStatus::Unmanaged => "?",
            VcsStatus::Modified => "!",
            VcsStatus::Added => "+",
            VcsStatus::Conflicted => "!?",
            VcsStatus::Deleted => "x",
        }
    }

    /// Get the terminal color used when rendering the badge
    pub fn color(&self) -> Color {
        match self {
            VcsStatus::Normal => Color::Green,
            VcsStatus::Unmanaged => Color::White,
            VcsStatus::Modified => Color::Red,
            VcsStatus::Added => Color::Blue,
            VcsStatus::Conflicted => Color::Yellow,
            VcsStatus::Deleted => Color::Red,
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            VcsStatus::Normal => "up to date",
            VcsStatus::Unmanaged => "not under version control",
            VcsStatus::Modified => "modified",
            VcsStatus::Added => "added",
            VcsStatus::Conflicted => "conflicted",
            VcsStatus::Deleted => "deleted",
        }
    }

    /// Check if this status represents a local change worth highlighting
    pub fn is_changed(&self) -> bool {
        !matches!(self, VcsStatus::Normal)
    }
}

impl fmt::Display for VcsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.badge())
    }
}
