//! Raw status report parsing.
//!
//! Console clients print one status line per path, but the shape of those lines is
//! only loosely structured and differs per client and platform. This module turns a
//! raw multi-line report into typed [`PathEntry`] values keyed by project-relative
//! paths, and hosts the sidecar promotion sweep that keeps `.meta` companions and
//! their primary assets in step.
//!
//! # Public API
//! - [`parse_status`]: Parse one raw report into path entries
//! - [`promote_sidecars`]: Copy non-Normal sidecar statuses onto quiet primaries
//! - [`PathEntry`], [`EntryKind`]: Parsed line representation
//!
//! # Key Features
//! - **Marker anchoring**: Paths are recognized by locating the tracked root name
//!   inside each line, which absorbs client-specific prefixes like `./`
//! - **Rename awareness**: Lines containing a `->` arrow resolve to the destination
//! - **Normalization**: Carriage returns and backslash separators are erased before
//!   any splitting happens

use crate::core::status::VcsStatus;
use crate::core::vcs::KindProfile;
use std::collections::HashMap;

/// Suffix of the metadata companion file every tracked asset may carry.
pub const SIDECAR_SUFFIX: &str = ".meta";

/// Rename lines show source and destination joined by this arrow.
const RENAME_ARROW: &str = "-> ";

/// Whether a parsed entry names a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One parsed status line.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// Project-relative path starting with the tracked root name
    pub path: String,
    pub status: VcsStatus,
    pub kind: EntryKind,
}

/// Parse a raw status report into per-path entries.
///
/// Each line is anchored on `marker` (the tracked root directory name). The rooted
/// form `marker/` is preferred so that a bare mention of the root, as printed for
/// the root directory itself, is still picked up by the fallback. Lines without the
/// marker carry no path of interest (summaries, ignore listings, external paths)
/// and are dropped. The status letter is classified from the whole line via the
/// kind's token table, independently of where the path starts.
pub fn parse_status(raw: &str, marker: &str, profile: &KindProfile) -> Vec<PathEntry> {
    let normalized = raw.replace('\r', "").replace('\\', "/");
    let rooted_marker = format!("{marker}/");
    let mut entries = Vec::new();

    for line in normalized.split('\n') {
        if line.is_empty() {
            continue;
        }

        let Some(start) = line.find(&rooted_marker).or_else(|| line.find(marker)) else {
            continue;
        };

        let mut candidate = &line[start..];
        // Renames list source and destination; only the destination exists now.
        if let Some(arrow) = candidate.find(RENAME_ARROW) {
            candidate = &candidate[arrow + RENAME_ARROW.len()..];
        }
        let candidate = candidate.trim_end_matches('/');
        if candidate.is_empty() {
            continue;
        }

        let status = profile.classify(line);
        let kind = if looks_like_file(candidate) {
            EntryKind::File
        } else {
            EntryKind::Directory
        };

        entries.push(PathEntry {
            path: candidate.to_string(),
            status,
            kind,
        });
    }

    entries
}

/// File/directory heuristic shared across the engine: a dot anywhere in the path
/// means file. Extensionless files and dotted directory names misclassify, which
/// only costs a badge on an unusual path, never a wrong action.
pub fn looks_like_file(path: &str) -> bool {
    path.contains('.')
}

/// Get the containing directory of a path, or the path itself when it has no
/// separator left.
pub fn containing_directory(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[..index],
        None => path,
    }
}

/// Copy each non-Normal sidecar status onto its primary asset when the primary is
/// absent from the map or sitting at Normal.
///
/// A `.meta` edit is the only trace some asset changes leave, so a changed sidecar
/// must surface on the asset it describes. Primaries that already carry a
/// non-Normal status keep it.
pub fn promote_sidecars(files: &mut HashMap<String, VcsStatus>) {
    let promotions: Vec<(String, VcsStatus)> = files
        .iter()
        .filter_map(|(path, status)| {
            if !status.is_changed() {
                return None;
            }
            let primary = path.strip_suffix(SIDECAR_SUFFIX)?;
            match files.get(primary) {
                None | Some(VcsStatus::Normal) => Some((primary.to_string(), *status)),
                Some(_) => None,
            }
        })
        .collect();

    for (primary, status) in promotions {
        files.insert(primary, status);
    }
}
