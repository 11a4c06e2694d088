//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`VcsOverlayError`] which provides comprehensive error handling
//! for all vcs-overlay operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`VcsOverlayError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, VcsOverlayError>`
//!
//! # Error Categories
//! - **Project errors**: Unusable project roots, paths outside the tracked tree
//! - **Process errors**: Client launch failures, timeouts, unreadable output
//! - **Action errors**: Operations the active VCS kind does not support
//! - **Settings errors**: Directory creation, read/write, parse failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for vcs-overlay
#[derive(Error, Debug)]
pub enum VcsOverlayError {
    // Project errors
    #[error("'{path}' is not a usable project root (needs a parent directory and a plain name)")]
    InvalidProjectRoot { path: PathBuf },

    #[error("'{path}' is outside the tracked project tree '{root}'")]
    PathOutsideProject { path: PathBuf, root: PathBuf },

    #[error("'{path}' does not exist in the working copy")]
    MissingTarget { path: PathBuf },

    // Process errors
    #[error("Failed to launch '{executable}': {source}")]
    ProcessLaunch {
        executable: String,
        source: std::io::Error,
    },

    #[error("'{executable}' did not exit within {seconds}s")]
    ProcessTimeout { executable: String, seconds: u64 },

    #[error("Could not read output of '{executable}'")]
    ProcessOutput { executable: String },

    #[error("'{executable}' exited with status {code}")]
    ProcessFailed { executable: String, code: i32 },

    // Action errors
    #[error("'{action}' is not available: {reason}")]
    ActionNotAllowed { action: String, reason: String },

    // Settings errors
    #[error("Failed to create settings directory '{path}': {source}")]
    SettingsDirCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    SettingsWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown setting '{name}'. Run 'vcs-overlay config' to list settings.")]
    UnknownSetting { name: String },

    #[error("Invalid value '{value}' for setting '{name}': {expected}")]
    InvalidSettingValue {
        name: String,
        value: String,
        expected: String,
    },

    #[error("Unknown version control kind '{name}'. Expected one of: svn, git, hg")]
    UnknownVcsKind { name: String },

    // Passthrough errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using VcsOverlayError
pub type Result<T> = std::result::Result<T, VcsOverlayError>;

impl VcsOverlayError {
    /// Create an invalid project root error
    pub fn invalid_project_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidProjectRoot { path: path.into() }
    }

    /// Create a path outside project error
    pub fn path_outside_project(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::PathOutsideProject {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Create a missing target error
    pub fn missing_target(path: impl Into<PathBuf>) -> Self {
        Self::MissingTarget { path: path.into() }
    }

    /// Create a process launch error
    pub fn process_launch(executable: impl Into<String>, source: std::io::Error) -> Self {
        Self::ProcessLaunch {
            executable: executable.into(),
            source,
        }
    }

    /// Create a process timeout error
    pub fn process_timeout(executable: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::ProcessTimeout {
            executable: executable.into(),
            seconds: timeout.as_secs(),
        }
    }

    /// Create a process output error
    pub fn process_output(executable: impl Into<String>) -> Self {
        Self::ProcessOutput {
            executable: executable.into(),
        }
    }

    /// Create an action not allowed error
    pub fn action_not_allowed(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ActionNotAllowed {
            action: action.into(),
            reason: reason.into(),
        }
    }

    /// Create a settings directory creation failed error
    pub fn settings_dir_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::SettingsDirCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings read failed error
    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings write failed error
    pub fn settings_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse failed error
    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown setting error
    pub fn unknown_setting(name: impl Into<String>) -> Self {
        Self::UnknownSetting { name: name.into() }
    }

    /// Create an invalid setting value error
    pub fn invalid_setting_value(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidSettingValue {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an unknown VCS kind error
    pub fn unknown_vcs_kind(name: impl Into<String>) -> Self {
        Self::UnknownVcsKind { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_project_root_display() {
        let err = VcsOverlayError::invalid_project_root("/");
        assert!(err.to_string().contains("is not a usable project root"));
    }

    #[test]
    fn test_missing_target_display() {
        let err = VcsOverlayError::missing_target("Assets/gone.png");
        assert_eq!(
            err.to_string(),
            "'Assets/gone.png' does not exist in the working copy"
        );
    }

    #[test]
    fn test_process_launch_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = VcsOverlayError::process_launch("svn", io_err);
        assert!(err.to_string().contains("Failed to launch 'svn'"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_process_timeout_display() {
        let err = VcsOverlayError::process_timeout("hg", std::time::Duration::from_secs(15));
        assert_eq!(err.to_string(), "'hg' did not exit within 15s");
    }

    #[test]
    fn test_process_failed_display() {
        let err = VcsOverlayError::ProcessFailed {
            executable: "git".to_string(),
            code: 128,
        };
        assert_eq!(err.to_string(), "'git' exited with status 128");
    }

    #[test]
    fn test_action_not_allowed_display() {
        let err = VcsOverlayError::action_not_allowed("push", "svn has no push concept");
        assert_eq!(
            err.to_string(),
            "'push' is not available: svn has no push concept"
        );
    }

    #[test]
    fn test_settings_read_failed_display() {
        let path = std::path::PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = VcsOverlayError::settings_read_failed(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_settings_parse_failed_display() {
        let path = std::path::PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = VcsOverlayError::settings_parse_failed(&path, json_err);
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains("/test/config.json"));
    }

    #[test]
    fn test_unknown_setting_display() {
        let err = VcsOverlayError::unknown_setting("colour");
        assert!(err.to_string().contains("Unknown setting 'colour'"));
    }

    #[test]
    fn test_invalid_setting_value_display() {
        let err = VcsOverlayError::invalid_setting_value("overlay", "maybe", "true or false");
        assert!(err.to_string().contains("'maybe'"));
        assert!(err.to_string().contains("true or false"));
    }

    #[test]
    fn test_unknown_vcs_kind_display() {
        let err = VcsOverlayError::unknown_vcs_kind("bzr");
        assert!(err.to_string().contains("bzr"));
        assert!(err.to_string().contains("svn, git, hg"));
    }
}
