//! Path status bookkeeping and upward propagation.
//!
//! [`StatusStore`] holds the two caches consumers query: one for file paths and one
//! for directory paths. Directory statuses are not what the VCS reports for the
//! directory itself (most back ends track nothing there) but the propagated result
//! of every changed file below it, so a dirty file marks its whole ancestor chain.
//!
//! # Public API
//! - [`StatusStore`]: Owned file and folder status caches
//! - [`FILE_CAPACITY`]: Upper bound on cached file entries before a defensive reset
//!
//! # Key Features
//! - **Wholesale rebuild**: Every refresh swaps in freshly built maps, stale single
//!   entries can never linger
//! - **Per-pass failure isolation**: A failed query empties only the cache that pass
//!   feeds, partial data beats none
//! - **First-non-Normal-wins propagation**: A severe status set early in a rebuild
//!   is never downgraded by a later entry

use crate::core::parser::{containing_directory, promote_sidecars, EntryKind, PathEntry};
use crate::core::status::VcsStatus;
use crate::core::vcs::KindProfile;
use std::collections::HashMap;

/// Cached file entries above this count trigger a reset before the next rebuild.
pub const FILE_CAPACITY: usize = 1024;

/// File and folder status caches with propagation.
#[derive(Debug, Default)]
pub struct StatusStore {
    files: HashMap<String, VcsStatus>,
    folders: HashMap<String, VcsStatus>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the file cache when it has grown past [`FILE_CAPACITY`].
    ///
    /// Projects with many generated paths can balloon the cache; called before a
    /// rebuild so memory stays bounded.
    pub fn enforce_capacity(&mut self) {
        if self.files.len() > FILE_CAPACITY {
            log::debug!("file status cache exceeded {FILE_CAPACITY} entries, resetting");
            self.files.clear();
        }
    }

    /// Rebuild both caches from the two parse passes.
    ///
    /// `file_pass` carries every tracked path, `changed_pass` only paths that differ
    /// from the baseline and feeds folder propagation. `None` marks a failed query:
    /// the cache that pass feeds ends up empty. A failed propagation pass empties
    /// the folder cache entirely, including directory entries the file pass routed
    /// there, because a half-propagated folder view is worse than none.
    pub fn rebuild(
        &mut self,
        file_pass: Option<Vec<PathEntry>>,
        changed_pass: Option<Vec<PathEntry>>,
        root_marker: &str,
        profile: &KindProfile,
    ) {
        let mut files = HashMap::new();
        let mut folders = HashMap::new();

        if let Some(entries) = file_pass {
            for entry in entries {
                match entry.kind {
                    EntryKind::File => {
                        files.insert(entry.path, entry.status);
                    }
                    EntryKind::Directory => {
                        folders.insert(entry.path, entry.status);
                    }
                }
            }
            promote_sidecars(&mut files);
        }

        match changed_pass {
            Some(entries) => {
                for entry in &entries {
                    let status = profile.coerce_dir_status(entry.status);
                    let scope = containing_directory(&entry.path);
                    for (index, ch) in scope.char_indices() {
                        if ch == '/' {
                            set_if_quiet(&mut folders, &scope[..index], status);
                        }
                    }
                    set_if_quiet(&mut folders, scope, status);
                }
            }
            None => {
                folders.clear();
            }
        }

        // The root itself is never badge-able.
        folders.remove(root_marker);

        self.files = files;
        self.folders = folders;
    }

    pub fn file_status(&self, path: &str) -> Option<VcsStatus> {
        self.files.get(path).copied()
    }

    pub fn folder_status(&self, path: &str) -> Option<VcsStatus> {
        self.folders.get(path).copied()
    }

    /// True when both caches are empty, the refresh failure signal
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.folders.clear();
    }

    #[cfg(test)]
    fn insert_file(&mut self, path: &str, status: VcsStatus) {
        self.files.insert(path.to_string(), status);
    }
}

/// First-non-Normal-wins upsert used by propagation.
fn set_if_quiet(folders: &mut HashMap<String, VcsStatus>, key: &str, status: VcsStatus) {
    match folders.get(key) {
        None | Some(VcsStatus::Normal) => {
            folders.insert(key.to_string(), status);
        }
        Some(_) => {}
    }
}
