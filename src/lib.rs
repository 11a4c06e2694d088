//! VCS Overlay - A lightweight Rust CLI that overlays version-control status onto project trees.
//!
//! This library provides the core functionality for vcs-overlay: invoking console VCS
//! clients (Subversion, Git, Mercurial), parsing their free-form status output into
//! per-path status, propagating file status up the directory tree, and caching results
//! so the expensive external call is not repeated on every query.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The status refresh engine and its query interface
//! - Raw status parsing and classification per VCS kind
//! - Per-project persisted settings
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    format_badge,
    parse_status,

    promote_sidecars,
    // Process invocation
    ConsoleRunner,
    DirCoercion,
    // Parsing
    EntryKind,
    GuiArgStyle,
    KindProfile,
    PathEntry,
    ProcessRunner,
    Result,

    // Settings
    Settings,
    // Refresh engine
    StatusEngine,
    // Status caching
    StatusStore,
    // VCS kinds
    VcsKind,
    // Error handling
    VcsOverlayError,
    // Status types
    VcsStatus,

    FILE_CAPACITY,
    SIDECAR_SUFFIX,
};
