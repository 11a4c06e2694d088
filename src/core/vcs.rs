//! Supported version control kinds and their per-kind profiles.
//!
//! This module defines [`VcsKind`] plus one [`KindProfile`] record per kind. A profile
//! bundles everything that differs between clients: executable names, status query
//! arguments, the letter table used to classify raw status lines, how directory
//! statuses are coerced during propagation, and how the graphical companion tool
//! expects its arguments.
//!
//! # Public API
//! - [`VcsKind`]: The supported version control systems
//! - [`KindProfile`]: Per-kind configuration record
//! - [`DirCoercion`]: Directory status coercion rule applied in the propagation pass
//! - [`GuiArgStyle`]: Argument convention of the graphical companion tool
//!
//! # Key Features
//! - **One record per kind**: No parallel arrays indexed by enum ordinal
//! - **Shared classification algorithm**: Only the letter tables differ per client
//! - **Static profiles**: Lookup via [`KindProfile::for_kind`] costs nothing

use crate::core::error::VcsOverlayError;
use crate::core::status::{VcsStatus, STATUS_ORDER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The version control systems the overlay knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Svn,
    Git,
    Hg,
}

impl VcsKind {
    /// Get the lowercase name used in settings and output
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsKind::Svn => "svn",
            VcsKind::Git => "git",
            VcsKind::Hg => "hg",
        }
    }

    /// All supported kinds, in settings display order
    pub fn all() -> [VcsKind; 3] {
        [VcsKind::Svn, VcsKind::Git, VcsKind::Hg]
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VcsKind {
    type Err = VcsOverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svn" | "subversion" => Ok(VcsKind::Svn),
            "git" => Ok(VcsKind::Git),
            "hg" | "mercurial" => Ok(VcsKind::Hg),
            other => Err(VcsOverlayError::unknown_vcs_kind(other)),
        }
    }
}

/// How directory statuses are coerced before upward propagation.
///
/// A deleted file must not paint its whole ancestor chain as deleted, so every kind
/// downgrades `Deleted` to `Modified`. Subversion reports scheduled adds and the like
/// on directories too, and those are all flattened to `Modified` as well so that only
/// conflicts keep their own badge above file level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirCoercion {
    /// Only `Deleted` becomes `Modified`
    DeletedOnly,
    /// Everything except `Normal` and `Conflicted` becomes `Modified`
    AllButConflicted,
}

/// Argument convention of the graphical companion tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiArgStyle {
    /// `/command:<cmd> /path:<paths> /closeonend:0` (TortoiseSVN, TortoiseGit)
    Tortoise,
    /// `<cmd> <path>` (TortoiseHg's thg)
    PlainCommand,
}

/// Per-kind configuration record.
///
/// `status_tokens` is index-aligned with [`STATUS_ORDER`]: entry `i` is the letter
/// that client prints for status `STATUS_ORDER[i]`. Mercurial reuses `C` for "clean"
/// where Subversion uses it for "conflict", which is why the table lives here and
/// the classification algorithm does not special-case any client.
#[derive(Debug)]
pub struct KindProfile {
    pub kind: VcsKind,
    /// Console client looked up on PATH
    pub console_exe: &'static str,
    /// Graphical companion tool looked up on PATH
    pub gui_exe: &'static str,
    status_tokens: [&'static str; 6],
    /// Arguments of the full status query (every tracked path)
    pub file_pass_args: &'static [&'static str],
    /// Arguments of the changed-only status query (feeds folder propagation)
    pub dir_pass_args: &'static [&'static str],
    pub dir_coercion: DirCoercion,
    /// Whether the kind distinguishes local commits from published ones
    pub supports_push: bool,
    /// GUI command word that brings the working copy up to date
    pub update_command: &'static str,
    pub gui_arg_style: GuiArgStyle,
    /// Whether one GUI launch can cover a file and its sidecar together
    pub combines_sidecar: bool,
}

static SVN_PROFILE: KindProfile = KindProfile {
    kind: VcsKind::Svn,
    console_exe: "svn",
    gui_exe: "TortoiseProc.exe",
    status_tokens: ["-", "?", "M", "A", "C", "D"],
    file_pass_args: &["status", "-v"],
    dir_pass_args: &["status"],
    dir_coercion: DirCoercion::AllButConflicted,
    supports_push: false,
    update_command: "update",
    gui_arg_style: GuiArgStyle::Tortoise,
    combines_sidecar: true,
};

static GIT_PROFILE: KindProfile = KindProfile {
    kind: VcsKind::Git,
    console_exe: "git",
    gui_exe: "TortoiseGitProc.exe",
    status_tokens: ["-", "?", "M", "A", "U", "D"],
    file_pass_args: &["status", "-u", "-s"],
    dir_pass_args: &["status", "-u", "-s"],
    dir_coercion: DirCoercion::DeletedOnly,
    supports_push: true,
    update_command: "pull",
    gui_arg_style: GuiArgStyle::Tortoise,
    combines_sidecar: true,
};

static HG_PROFILE: KindProfile = KindProfile {
    kind: VcsKind::Hg,
    console_exe: "hg",
    gui_exe: "thg.exe",
    status_tokens: ["C", "?", "M", "A", "U", "R"],
    file_pass_args: &["status", "-A"],
    dir_pass_args: &["status"],
    dir_coercion: DirCoercion::DeletedOnly,
    supports_push: true,
    update_command: "update",
    gui_arg_style: GuiArgStyle::PlainCommand,
    combines_sidecar: false,
};

impl KindProfile {
    /// Get the static profile for a kind
    pub fn for_kind(kind: VcsKind) -> &'static KindProfile {
        match kind {
            VcsKind::Svn => &SVN_PROFILE,
            VcsKind::Git => &GIT_PROFILE,
            VcsKind::Hg => &HG_PROFILE,
        }
    }

    /// Classify one raw status line from this kind's console client.
    ///
    /// Only the first two characters of the whitespace-trimmed line are examined.
    /// Lines shorter than that carry no status column and classify as `Normal`.
    /// Tokens are tried in table order and the first hit wins, so a git `AM` line
    /// classifies as `Modified` rather than `Added`. Lines with no recognized
    /// letter fall back to `Normal`.
    pub fn classify(&self, raw_line: &str) -> VcsStatus {
        let column: String = raw_line.trim_start().chars().take(2).collect();
        if column.chars().count() < 2 {
            return VcsStatus::Normal;
        }
        for (index, token) in self.status_tokens.iter().enumerate() {
            if column.contains(token) {
                return STATUS_ORDER[index];
            }
        }
        VcsStatus::Normal
    }

    /// Apply this kind's directory coercion rule to a propagated status
    pub fn coerce_dir_status(&self, status: VcsStatus) -> VcsStatus {
        match self.dir_coercion {
            DirCoercion::DeletedOnly => {
                if status == VcsStatus::Deleted {
                    VcsStatus::Modified
                } else {
                    status
                }
            }
            DirCoercion::AllButConflicted => match status {
                VcsStatus::Normal | VcsStatus::Conflicted => status,
                _ => VcsStatus::Modified,
            },
        }
    }

    /// Build the argument list for launching the graphical companion tool
    pub fn gui_args(&self, command: &str, path_spec: &str) -> Vec<String> {
        match self.gui_arg_style {
            GuiArgStyle::Tortoise => vec![
                format!("/command:{command}"),
                format!("/path:{path_spec}"),
                "/closeonend:0".to_string(),
            ],
            GuiArgStyle::PlainCommand => vec![command.to_string(), path_spec.to_string()],
        }
    }
}
