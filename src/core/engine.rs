//! Status refresh coordination and the consumer-facing query interface.
//!
//! [`StatusEngine`] owns everything the overlay needs at runtime: the status
//! caches, the refresh cursor, the outcome flag of the last refresh and the
//! process runner used to reach the console client. One engine instance serves
//! one project root; nothing lives in process-wide state.
//!
//! # Public API
//! - [`StatusEngine`]: Owned refresh state machine plus queries
//!
//! # Key Features
//! - **Directory-granular freshness**: A query only triggers the expensive
//!   external calls when its containing directory differs from the last one
//!   refreshed, so sibling lookups in one pass share a single refresh
//! - **Two-pass rebuild**: A full status query feeds the file cache, a
//!   changed-only query feeds folder propagation
//! - **Graceful degradation**: A missing or hung client yields "no status
//!   available", never an error crossing the query interface

use crate::core::config::Settings;
use crate::core::error::{Result, VcsOverlayError};
use crate::core::invoker::ProcessRunner;
use crate::core::parser::{containing_directory, looks_like_file, parse_status, PathEntry};
use crate::core::status::VcsStatus;
use crate::core::store::StatusStore;
use crate::core::vcs::{KindProfile, VcsKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Refresh state machine and status cache for one project root.
pub struct StatusEngine {
    profile: &'static KindProfile,
    /// Name of the tracked root directory; every cache key starts with it
    marker: String,
    /// Parent of the tracked root; the console client runs from here so its
    /// output paths contain the marker
    work_dir: PathBuf,
    console_exe: String,
    timeout: Duration,
    runner: Box<dyn ProcessRunner>,
    store: StatusStore,
    /// Directory the last refresh was scoped to
    cursor: Option<String>,
    /// Outcome of the last refresh; `None` until the first one runs
    refresh_outcome: Option<bool>,
    launch_warned: bool,
}

impl StatusEngine {
    /// Build an engine for the project rooted at `project_root`.
    ///
    /// The root must have a parent directory and a plain UTF-8 name; the name
    /// becomes the path marker all cache keys start with.
    pub fn new(
        project_root: &Path,
        settings: &Settings,
        runner: Box<dyn ProcessRunner>,
    ) -> Result<Self> {
        let marker = project_root
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| VcsOverlayError::invalid_project_root(project_root))?
            .to_string();

        let work_dir = match project_root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => return Err(VcsOverlayError::invalid_project_root(project_root)),
        };

        Ok(Self {
            profile: settings.profile(),
            marker,
            work_dir,
            console_exe: settings.console_executable().to_string(),
            timeout: settings.timeout(),
            runner,
            store: StatusStore::new(),
            cursor: None,
            refresh_outcome: None,
            launch_warned: false,
        })
    }

    /// Name of the tracked root directory
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Directory the console client is invoked from
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn kind(&self) -> VcsKind {
        self.profile.kind
    }

    /// Whether the most recent refresh produced any status data
    pub fn update_succeeded(&self) -> bool {
        self.refresh_outcome == Some(true)
    }

    /// Make sure the cache covers `path`, refreshing when its containing
    /// directory differs from the last refreshed one. Returns
    /// [`Self::update_succeeded`] afterwards.
    pub fn ensure_fresh(&mut self, path: &str) -> bool {
        let scope = scope_directory(path).to_string();
        if self.cursor.as_deref() != Some(scope.as_str()) {
            self.refresh(&scope);
        }
        self.update_succeeded()
    }

    /// Drop all cached state so the next query refreshes from scratch.
    ///
    /// Called after an external action may have changed the working copy, and
    /// when settings change under a live engine.
    pub fn invalidate(&mut self) {
        self.store.clear();
        self.cursor = None;
        self.refresh_outcome = None;
    }

    /// Status of a single path, `None` when no status is available.
    ///
    /// Lookup order is file cache, then folder cache, then a `Normal` fallback
    /// for any path the latest output simply did not mention. After a failed
    /// refresh every path is `None` so consumers suppress badges instead of
    /// showing a misleading all-clear.
    pub fn status_of(&self, path: &str) -> Option<VcsStatus> {
        if path.is_empty() || !self.update_succeeded() {
            return None;
        }
        self.store
            .file_status(path)
            .or_else(|| self.store.folder_status(path))
            .or(Some(VcsStatus::Normal))
    }

    /// False when any of `paths` is explicitly not under version control.
    ///
    /// Used to gate actions: add wants unmanaged paths, commit and friends want
    /// managed ones. With no status available nothing is reported unmanaged, so
    /// actions stay usable when the client is missing.
    pub fn is_managed<'a, I>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths
            .into_iter()
            .all(|path| self.status_of(path) != Some(VcsStatus::Unmanaged))
    }

    fn refresh(&mut self, scope: &str) {
        self.store.enforce_capacity();

        let file_pass = self.query_pass(self.profile.file_pass_args, scope);
        let changed_pass = self.query_pass(self.profile.dir_pass_args, scope);
        self.store
            .rebuild(file_pass, changed_pass, &self.marker, self.profile);

        let succeeded = !self.store.is_empty();
        if self.refresh_outcome != Some(succeeded) {
            if succeeded {
                log::info!(
                    "status refresh for '{scope}' succeeded ({} files, {} folders)",
                    self.store.file_count(),
                    self.store.folder_count()
                );
            } else {
                log::error!("status refresh for '{scope}' produced no entries");
            }
        }
        self.refresh_outcome = Some(succeeded);
        self.cursor = Some(scope.to_string());
    }

    /// Run one status query and parse it, `None` on any invocation failure.
    fn query_pass(&mut self, args: &[&str], scope: &str) -> Option<Vec<PathEntry>> {
        let mut full_args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        full_args.push(format!("./{scope}"));

        match self
            .runner
            .run(&self.console_exe, &full_args, &self.work_dir, self.timeout)
        {
            Ok(raw) => {
                self.launch_warned = false;
                Some(parse_status(&raw, &self.marker, self.profile))
            }
            Err(err) => {
                if !self.launch_warned {
                    log::warn!("status query failed: {err}");
                    self.launch_warned = true;
                }
                None
            }
        }
    }
}

/// Directory a query for `path` is scoped to: files refresh their containing
/// directory, directories refresh themselves.
fn scope_directory(path: &str) -> &str {
    if looks_like_file(path) {
        containing_directory(path)
    } else {
        path
    }
}
