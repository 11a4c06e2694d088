use crate::commands::status::resolve_project_root;
use crate::core::{
    config::Settings,
    engine::StatusEngine,
    error::{Result, VcsOverlayError},
    invoker::ConsoleRunner,
    output::print_success,
    parser::SIDECAR_SUFFIX,
    vcs::KindProfile,
};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One working-copy operation handed off to the graphical client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsAction {
    Update,
    Commit,
    Push,
    Log,
    Cleanup,
    Add,
    Revert,
    Rename,
    Delete,
}

impl VcsAction {
    pub fn name(self) -> &'static str {
        match self {
            VcsAction::Update => "update",
            VcsAction::Commit => "commit",
            VcsAction::Push => "push",
            VcsAction::Log => "log",
            VcsAction::Cleanup => "cleanup",
            VcsAction::Add => "add",
            VcsAction::Revert => "revert",
            VcsAction::Rename => "rename",
            VcsAction::Delete => "delete",
        }
    }

    /// The command word the graphical client expects. Mostly the action name,
    /// except that bringing a working copy up to date is "pull" for Git and
    /// the clients spell deletion "remove".
    fn command_word(self, profile: &KindProfile) -> &'static str {
        match self {
            VcsAction::Update => profile.update_command,
            VcsAction::Delete => "remove",
            other => other.name(),
        }
    }
}

pub fn execute_action(action: VcsAction, path: Option<PathBuf>) -> Result<()> {
    let project_root = resolve_project_root(None)?;
    let target = resolve_target(&project_root, path)?;
    let settings = Settings::load_or_create(&project_root)?;
    let profile = settings.profile();
    let mut engine = StatusEngine::new(&project_root, &settings, Box::new(ConsoleRunner::new()))?;

    let key = cache_key(&project_root, engine.marker(), &target);
    engine.ensure_fresh(&key);
    ensure_allowed(action, profile, &engine, &key)?;

    let primary = target.to_string_lossy().into_owned();
    let sidecar = format!("{primary}{SIDECAR_SUFFIX}");
    let specs = launch_specs(action, profile, &primary, Path::new(&sidecar).exists());
    let command = action.command_word(profile);
    for spec in &specs {
        launch_gui(&settings, profile, engine.work_dir(), command, spec)?;
    }

    // The tool may have touched anything under the scope
    engine.invalidate();
    engine.ensure_fresh(&key);
    match engine.status_of(&key) {
        Some(status) => print_success(&format!(
            "{} finished, '{}' is now {}",
            action.name(),
            key,
            status.description()
        )),
        None => print_success(&format!("{} finished", action.name())),
    }

    Ok(())
}

/// Resolve the acted-on path: default to the project root itself, require the
/// result to exist and to live inside the root.
fn resolve_target(project_root: &Path, path: Option<PathBuf>) -> Result<PathBuf> {
    let requested = path.unwrap_or_else(|| PathBuf::from("."));
    let absolute = requested
        .canonicalize()
        .map_err(|_| VcsOverlayError::missing_target(&requested))?;
    if !absolute.starts_with(project_root) {
        return Err(VcsOverlayError::path_outside_project(absolute, project_root));
    }
    Ok(absolute)
}

/// Cache key for the target: the root marker plus the `/`-joined relative
/// path; the root itself maps to the bare marker.
fn cache_key(project_root: &Path, marker: &str, target: &Path) -> String {
    let mut key = marker.to_string();
    if let Ok(relative) = target.strip_prefix(project_root) {
        for component in relative.components() {
            key.push('/');
            key.push_str(&component.as_os_str().to_string_lossy());
        }
    }
    key
}

/// Refuse actions that cannot apply: push on a kind without a push concept,
/// add on an already-tracked path, tracked-only actions on untracked paths.
///
/// The tracked-state checks only run while the engine has fresh data; with the
/// console client missing there is nothing to check against and the graphical
/// client gives its own answer.
fn ensure_allowed(
    action: VcsAction,
    profile: &KindProfile,
    engine: &StatusEngine,
    key: &str,
) -> Result<()> {
    if action == VcsAction::Push && !profile.supports_push {
        return Err(VcsOverlayError::action_not_allowed(
            action.name(),
            format!("{} does not separate publishing from committing", profile.kind),
        ));
    }
    if !engine.update_succeeded() {
        return Ok(());
    }
    let managed = engine.is_managed([key]);
    match action {
        VcsAction::Add if managed => Err(VcsOverlayError::action_not_allowed(
            action.name(),
            format!("'{key}' is already tracked"),
        )),
        VcsAction::Commit
        | VcsAction::Revert
        | VcsAction::Log
        | VcsAction::Rename
        | VcsAction::Delete
            if !managed =>
        {
            Err(VcsOverlayError::action_not_allowed(
                action.name(),
                format!("'{key}' is not tracked"),
            ))
        }
        _ => Ok(()),
    }
}

/// Path arguments for the client launches this action needs, in launch order.
///
/// An asset and its sidecar ride in one launch when the client accepts the
/// `primary*sidecar` multi-path form; otherwise the sidecar gets a launch of
/// its own. Renames never combine: the sidecar rename must finish before the
/// asset rename starts.
fn launch_specs(
    action: VcsAction,
    profile: &KindProfile,
    primary: &str,
    has_sidecar: bool,
) -> Vec<String> {
    let sidecar = format!("{primary}{SIDECAR_SUFFIX}");
    if !has_sidecar {
        return vec![primary.to_string()];
    }
    if action == VcsAction::Rename {
        return vec![sidecar, primary.to_string()];
    }
    if profile.combines_sidecar {
        vec![format!("{primary}*{sidecar}")]
    } else {
        vec![sidecar, primary.to_string()]
    }
}

/// Launch the graphical client and wait for it to close.
///
/// A non-zero exit is logged but not fatal: the tools exit non-zero for
/// user-cancelled dialogs, and the follow-up refresh shows the real outcome.
fn launch_gui(
    settings: &Settings,
    profile: &KindProfile,
    work_dir: &Path,
    command: &str,
    path_spec: &str,
) -> Result<()> {
    let executable = settings.gui_executable();
    let args = profile.gui_args(command, path_spec);
    log::debug!("launching {} {:?}", executable, args);
    let status = Command::new(executable)
        .args(&args)
        .current_dir(work_dir)
        .status()
        .map_err(|source| VcsOverlayError::process_launch(executable, source))?;
    if !status.success() {
        log::warn!("{} exited with {}", executable, status);
    }
    Ok(())
}
