//! Shared utilities for vcs-overlay integration tests
//!
//! Tests drive the real binary through `assert_cmd` against temporary project
//! trees. Fake console clients installed on a prepended PATH make engine
//! behavior deterministic without svn, git or hg installed; the tests that
//! want a real working copy use git directly.

pub mod assertions;
pub mod project;
