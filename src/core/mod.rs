//! Core functionality for the vcs-overlay tool.
//!
//! This module provides the fundamental building blocks for status synchronization:
//! classifying and parsing raw VCS output, caching per-path status, coordinating
//! refreshes, and invoking external clients.

pub mod config;
pub mod dirs;
pub mod engine;
pub mod error;
pub mod invoker;
pub mod output;
pub mod parser;
pub mod status;
pub mod store;
pub mod vcs;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, VcsOverlayError};

// === Status types ===
// Type-safe working-copy status enumeration shared by every VCS kind
pub use status::VcsStatus;

// === VCS kinds ===
// Supported systems and their per-kind configuration records
pub use vcs::{DirCoercion, GuiArgStyle, KindProfile, VcsKind};

// === Parsing ===
// Raw status report parsing and the sidecar promotion sweep
pub use parser::{parse_status, promote_sidecars, EntryKind, PathEntry, SIDECAR_SUFFIX};

// === Status caching ===
// File and folder caches with upward propagation
pub use store::{StatusStore, FILE_CAPACITY};

// === Refresh engine ===
// The owned refresh state machine and consumer query interface
pub use engine::StatusEngine;

// === Process invocation ===
// Injectable external-process seam and its production implementation
pub use invoker::{ConsoleRunner, ProcessRunner};

// === Settings ===
// Persisted per-project configuration
pub use config::Settings;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{format_badge, print_error, print_section_header, print_success};
